//! # replay-stats-core
//!
//! Core library for comparing two competitors' statistics from a recorded
//! match and for browsing match files.
//!
//! This crate provides the foundational functionality for:
//! - Nested, never-failing lookups into the parser's statistics bundle
//! - Formatting statistic values and deciding which side to highlight
//! - Composing declarative field specs into a side-by-side table
//! - Grouping match participants into sides for file listings
//! - Loading and scanning match files, and exporting rendered tables
//!
//! ## Modules
//!
//! - [`config`] - Persisted user configuration
//! - [`error`] - Error types and Result alias
//! - [`format`] - Display formatting of statistic values
//! - [`highlight`] - Highlight rules
//! - [`listing`] - Match files, list rows and directory scanning
//! - [`path`] - Nested path extraction
//! - [`players`] - Participants, names and grouping
//! - [`stats`] - Statistics bundle, record indexing and export
//! - [`table`] - Field/section specs and table composition
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use replay_stats_core::{CompetitorPair, MatchComparison, MatchFile};
//!
//! let file = MatchFile::load(Path::new("Game_20200619T042000.json")).expect("Failed to load");
//! let comparison = MatchComparison::build(&file, CompetitorPair::default());
//! for section in comparison.table.sections() {
//!     println!("{}: {} rows", section.title, section.rows.len());
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod format;
pub mod highlight;
pub mod listing;
pub mod path;
pub mod players;
pub mod stats;
pub mod table;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Configuration
pub use config::{Config, ThemeName};

// Statistics
pub use stats::{
    export_csv, export_json, index_by_competitor, CompetitorPair, CompetitorRecords,
    ExportFormat, Ratio, StatsBundle,
};

// Tables
pub use highlight::{Component, Highlight};
pub use table::{
    compose, overall_sections, overall_table, render_field, Cell, FieldSpec, Row, Section,
    SectionSpec, TableDescriptor, ValueFormat,
};

// Players
pub use players::{
    extract_player_names, flatten_groups, group_competitors, Competitor, GameMetadata,
    GameSettings, PlayerNames,
};

// Listing
pub use listing::{FileRow, MatchComparison, MatchFile, PlayerHeader, ReplayScanner, ScanResult};
