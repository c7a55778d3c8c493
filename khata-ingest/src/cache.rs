//! Content-addressed snapshot cache for normalized statements.
//!
//! Snapshots are keyed by the source file's SHA-256 fingerprint, so the
//! policy is simply "never invalidate": changed bytes land under a fresh key
//! and a stale snapshot is never addressed again. Corrupt or missing
//! snapshots read as cache misses. At-most-one computation per identity is
//! the caller's discipline; this type only stores and retrieves.

use anyhow::{Context, Result};
use khata_core::Transaction;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identity of one raw statement source: where it lives and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceId {
    pub path: PathBuf,
    pub fingerprint: String,
}

impl SourceId {
    /// Fingerprint the file contents at `path`.
    pub fn for_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            fingerprint: hex::encode(Sha256::digest(&bytes)),
        })
    }
}

/// On-disk store of normalized transaction sequences, one JSON snapshot per
/// source identity.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    dir: PathBuf,
}

impl SnapshotCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn snapshot_path(&self, id: &SourceId) -> PathBuf {
        self.dir.join(format!("{}.json", id.fingerprint))
    }

    /// Load the snapshot for `id`, if a readable one exists.
    pub fn load(&self, id: &SourceId) -> Option<Vec<Transaction>> {
        let path = self.snapshot_path(id);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(txns) => {
                debug!(path = %path.display(), "snapshot cache hit");
                Some(txns)
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "unreadable snapshot treated as a miss");
                None
            }
        }
    }

    /// Persist `txns` as the snapshot for `id`.
    pub fn store(&self, id: &SourceId, txns: &[Transaction]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating cache dir {}", self.dir.display()))?;
        let path = self.snapshot_path(id);
        let raw = serde_json::to_string(txns).context("serializing snapshot")?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
