//! Per-competitor statistics as produced by the replay parser
//!
//! The bundle is kept in its parsed JSON form; [`index`] turns one of its
//! category arrays into a lookup by player index, and [`export`] writes
//! rendered tables out to disk.

mod export;
mod index;
mod model;

pub use export::{export_csv, export_json, ExportFormat};
pub use index::{index_by_competitor, CompetitorRecords, PLAYER_INDEX_KEY};
pub use model::*;
