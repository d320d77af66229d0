//! Settings and metadata records describing who played a match

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Player type value for a CPU-controlled slot
pub const PLAYER_TYPE_CPU: u8 = 1;

/// One participant as recorded in the match settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub player_index: u32,
    /// Physical controller slot, 1-based
    pub port: u32,
    #[serde(default)]
    pub team_id: Option<u32>,
    /// 0 human, 1 CPU, other values reserved by the parser
    #[serde(rename = "type", default)]
    pub player_type: Option<u8>,
    #[serde(default)]
    pub character_id: Option<u32>,
    #[serde(default)]
    pub character_color: Option<u32>,
    #[serde(default)]
    pub nametag: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub connect_code: Option<String>,
}

impl Competitor {
    pub fn is_cpu(&self) -> bool {
        self.player_type == Some(PLAYER_TYPE_CPU)
    }

    /// Name used when neither a code nor a tag is known
    pub fn backup_name(&self) -> &'static str {
        if self.is_cpu() {
            "CPU"
        } else {
            "Player"
        }
    }
}

/// Match settings: who played and whether it was a teams game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    #[serde(default)]
    pub players: Vec<Competitor>,
    #[serde(default)]
    pub is_teams: bool,
}

impl GameSettings {
    pub fn player(&self, player_index: u32) -> Option<&Competitor> {
        self.players.iter().find(|p| p.player_index == player_index)
    }
}

/// Online names recorded for a player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataNames {
    #[serde(default)]
    pub netplay: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMetadata {
    #[serde(default)]
    pub names: MetadataNames,
}

/// Match metadata written alongside the settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetadata {
    #[serde(default)]
    pub start_at: Option<String>,
    /// Keyed by player index as a string
    #[serde(default)]
    pub players: BTreeMap<String, PlayerMetadata>,
}

impl GameMetadata {
    pub fn player(&self, player_index: u32) -> Option<&PlayerMetadata> {
        self.players.get(&player_index.to_string())
    }
}
