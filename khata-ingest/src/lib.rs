//! khata-ingest: raw statement ingestion — CSV reading, normalization into
//! date-ordered transactions, and the content-addressed snapshot cache.

pub mod cache;
pub mod normalize;
pub mod statement;
pub mod types;

pub use cache::{SnapshotCache, SourceId};
pub use normalize::normalize;
pub use statement::{read_rows, read_rows_from_path};
pub use types::RawRow;
