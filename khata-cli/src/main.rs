use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use khata_core::Transaction;
use khata_ingest::{SnapshotCache, SourceId, normalize, read_rows_from_path};
use khata_insights::{
    Categorizer, compute_overview, filter_by_date, generate_recommendations, monthly_totals,
    split_recommendations, weekly_totals,
};
use std::collections::HashMap;
use std::path::PathBuf;

mod config;

use config::{Config, load_config};

#[derive(Parser, Debug)]
#[command(name = "khata", version, about = "Bank statement insights CLI")]
struct Cli {
    /// Path to a config file (default: ./khata.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline totals for a statement
    Overview(StatementArgs),

    /// Transaction counts per category
    Categories(StatementArgs),

    /// Weekly or monthly withdrawal/deposit totals
    Pattern {
        #[command(flatten)]
        statement: StatementArgs,

        /// Aggregation period
        #[arg(long, value_enum, default_value = "monthly")]
        period: Period,
    },

    /// Tiered discretionary-spending recommendations
    Recommend {
        #[command(flatten)]
        statement: StatementArgs,

        /// How many cards land in the primary list (overrides config)
        #[arg(long)]
        max_recs: Option<usize>,
    },
}

#[derive(Args, Debug)]
struct StatementArgs {
    /// Path to the statement CSV
    #[arg(long)]
    csv: PathBuf,

    /// Keep only transactions on or after this date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Keep only transactions on or before this date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Period {
    Weekly,
    Monthly,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Overview(args) => cmd_overview(&cfg, &args),
        Command::Categories(args) => cmd_categories(&cfg, &args),
        Command::Pattern { statement, period } => cmd_pattern(&cfg, &statement, period),
        Command::Recommend {
            statement,
            max_recs,
        } => cmd_recommend(&cfg, &statement, max_recs),
    }
}

/// Load a statement through the snapshot cache, then apply the date filter.
/// Range validation happens here, before anything reaches the core.
fn load_transactions(cfg: &Config, args: &StatementArgs) -> Result<Vec<Transaction>> {
    if let (Some(start), Some(end)) = (args.start, args.end) {
        if start > end {
            bail!("start date {start} is after end date {end}");
        }
    }

    let id = SourceId::for_path(&args.csv)?;
    let cache = SnapshotCache::new(&cfg.ingest.cache_dir);
    let txns = match cache.load(&id) {
        Some(txns) => txns,
        None => {
            let rows = read_rows_from_path(&args.csv)?;
            let txns = normalize(&rows)?;
            cache.store(&id, &txns)?;
            txns
        }
    };

    let start = args.start.unwrap_or(NaiveDate::MIN);
    let end = args.end.unwrap_or(NaiveDate::MAX);
    Ok(filter_by_date(&txns, start, end))
}

fn cmd_overview(cfg: &Config, args: &StatementArgs) -> Result<()> {
    let txns = load_transactions(cfg, args)?;
    let overview = compute_overview(&txns);
    println!("Transactions:    {}", overview.transactions);
    println!("Total spent:     ₹{:.2}", overview.total_spent);
    println!("Total received:  ₹{:.2}", overview.total_received);
    println!("Avg withdrawal:  ₹{:.2}", overview.avg_withdrawal);
    Ok(())
}

fn cmd_categories(cfg: &Config, args: &StatementArgs) -> Result<()> {
    let txns = load_transactions(cfg, args)?;
    let categorizer = Categorizer::new(cfg.insights.rule_table())?;
    let txns = categorizer.categorize_all(&txns);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for txn in &txns {
        if let Some(category) = txn.category.as_deref() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    for (category, count) in counts {
        println!("{count:>6}  {category}");
    }
    Ok(())
}

fn cmd_pattern(cfg: &Config, args: &StatementArgs, period: Period) -> Result<()> {
    let txns = load_transactions(cfg, args)?;
    let totals = match period {
        Period::Weekly => weekly_totals(&txns),
        Period::Monthly => monthly_totals(&txns),
    };
    println!("{:<12} {:>14} {:>14}", "period end", "withdrawals", "deposits");
    for row in totals {
        println!(
            "{:<12} {:>14.2} {:>14.2}",
            row.period_end.to_string(),
            row.withdrawals,
            row.deposits
        );
    }
    Ok(())
}

fn cmd_recommend(cfg: &Config, args: &StatementArgs, max_recs: Option<usize>) -> Result<()> {
    let max_recs = max_recs.unwrap_or(cfg.insights.max_recs);
    if max_recs < 1 {
        bail!("--max-recs must be at least 1");
    }

    let txns = load_transactions(cfg, args)?;
    let categorizer = Categorizer::new(cfg.insights.rule_table())?;
    let txns = categorizer.categorize_all(&txns);

    let recs = generate_recommendations(&txns, &cfg.insights.essential_categories());
    if recs.is_empty() {
        println!("No discretionary spending found in this period.");
        return Ok(());
    }

    let (primary, secondary) = split_recommendations(&recs, max_recs);
    for rec in primary {
        println!("{} {}", rec.icon, rec.message);
    }
    if !secondary.is_empty() {
        println!();
        println!("More category insights:");
        for rec in secondary {
            println!("{} {}", rec.icon, rec.message);
        }
    }
    Ok(())
}
