//! Match files on disk and their browser view models
//!
//! A match file is the JSON document the replay parser writes for one
//! recorded game: its settings, metadata and computed statistics.

mod comparison;
mod file;
mod row;
mod scanner;

pub use comparison::{MatchComparison, PlayerHeader};
pub use file::{MatchFile, MATCH_FILE_EXTENSION};
pub use row::{format_start_time, parse_start_time, FileRow, RowPlayer};
pub use scanner::{ReplayScanner, ScanError, ScanResult};
