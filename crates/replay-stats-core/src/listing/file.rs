//! Loading a single match document

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::players::{GameMetadata, GameSettings};
use crate::stats::StatsBundle;

/// Extension of match documents written by the parser
pub const MATCH_FILE_EXTENSION: &str = "json";

/// On-disk shape of a match document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchDocument {
    settings: GameSettings,
    #[serde(default)]
    metadata: Option<GameMetadata>,
    #[serde(default)]
    stats: Option<StatsBundle>,
    #[serde(default)]
    start_time: Option<String>,
}

/// A loaded match file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFile {
    /// File name without directories
    pub name: String,
    pub full_path: PathBuf,
    /// Start time as recorded, parsed only for display
    pub start_time: Option<String>,
    pub settings: GameSettings,
    pub metadata: Option<GameMetadata>,
    /// `None` when the parser could not compute statistics
    pub stats: Option<StatsBundle>,
}

impl MatchFile {
    /// Load and validate a match document
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(path, &content)
    }

    /// Parse a match document read from `path`
    pub fn from_json(path: &Path, content: &str) -> Result<Self> {
        let document: MatchDocument =
            serde_json::from_str(content).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            })?;

        if document.settings.players.is_empty() {
            return Err(Error::InvalidMatchFile {
                path: path.to_path_buf(),
                reason: "settings contain no players".to_string(),
            });
        }

        // Fall back to the metadata timestamp when the parser left it out
        let start_time = document.start_time.or_else(|| {
            document
                .metadata
                .as_ref()
                .and_then(|m| m.start_at.clone())
        });

        Ok(Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            full_path: path.to_path_buf(),
            start_time,
            settings: document.settings,
            metadata: document.metadata,
            stats: document.stats,
        })
    }
}
