//! User configuration

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::CompetitorPair;

/// Color scheme used by the terminal browser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeName {
    #[default]
    Green,
    Purple,
    Monochrome,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Green, ThemeName::Purple, ThemeName::Monochrome];

    /// The theme after this one, wrapping around
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Green => write!(f, "Green"),
            ThemeName::Purple => write!(f, "Purple"),
            ThemeName::Monochrome => write!(f, "Monochrome"),
        }
    }
}

/// Configuration for replay-stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory browsed when none is given on the command line
    pub replay_dir: Option<PathBuf>,
    /// Competitors compared in stats tables
    pub competitors: CompetitorPair,
    /// How many directory levels a scan descends
    pub scan_depth: usize,
    pub theme: ThemeName,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replay_dir: None,
            competitors: CompetitorPair::default(),
            scan_depth: 1,
            theme: ThemeName::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("replay-stats").join("config.json"))
    }

    /// Load config from disk, falling back to defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };

        Self::from_json(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("No config directory on this platform".to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
