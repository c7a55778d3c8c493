use anyhow::{Context, Result};
use khata_core::{CategoryRule, EssentialCategories, RuleTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ingest: IngestSection,
    pub insights: InsightsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSection {
    /// Snapshot cache root. Snapshots are content-addressed and never
    /// invalidated; a changed source file simply lands under a new key.
    pub cache_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsSection {
    /// How many recommendations land in the primary list (>= 1).
    pub max_recs: usize,
    /// Full override of the essential-category set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub essential: Option<Vec<String>>,
    /// Full override of the rule table. Ordered: first match wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CategoryRule>>,
    /// Rules appended after the built-in table.
    pub extra_rules: Vec<CategoryRule>,
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(".khata-cache"),
        }
    }
}

impl Default for InsightsSection {
    fn default() -> Self {
        Self {
            max_recs: 2,
            essential: None,
            rules: None,
            extra_rules: Vec::new(),
        }
    }
}

impl InsightsSection {
    /// Resolve the effective rule table: full override or the built-in
    /// table, with extras appended in declaration order.
    pub fn rule_table(&self) -> RuleTable {
        let mut table = match &self.rules {
            Some(rules) => RuleTable::new(rules.clone()),
            None => RuleTable::default(),
        };
        table.extend(self.extra_rules.iter().cloned());
        table
    }

    pub fn essential_categories(&self) -> EssentialCategories {
        match &self.essential {
            Some(categories) => EssentialCategories::new(categories.iter().cloned()),
            None => EssentialCategories::default(),
        }
    }
}

/// Load config from `path`, or from `./khata.toml` when present, falling back
/// to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from("khata.toml");
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };
    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
