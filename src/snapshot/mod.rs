// Snapshot acquisition: one fetch per run, no retry.

pub mod source;

pub use source::{FileSource, HttpSource, SnapshotSource, for_location, parse_snapshot};
