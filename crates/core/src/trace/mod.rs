//! Consumers of a finished trace: CSV export and step-by-step replay.

/// CSV export.
pub mod export;
/// Replay cursor.
pub mod replay;

pub use export::{CSV_HEADER, default_file_name, to_csv_string, write_csv};
pub use replay::Replay;
