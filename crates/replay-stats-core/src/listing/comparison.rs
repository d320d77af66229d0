//! Everything needed to show one match's stats table

use serde::{Deserialize, Serialize};

use super::MatchFile;
use crate::players::extract_player_names;
use crate::stats::CompetitorPair;
use crate::table::{overall_table, TableDescriptor};

/// Column header for one compared competitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHeader {
    pub player_index: u32,
    pub name: String,
    pub character_id: u32,
    pub character_color: u32,
}

/// Stats table for a match along with its column headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchComparison {
    pub file_name: String,
    pub left: PlayerHeader,
    pub right: PlayerHeader,
    pub table: TableDescriptor,
}

impl MatchComparison {
    pub fn build(file: &MatchFile, pair: CompetitorPair) -> Self {
        Self {
            file_name: file.name.clone(),
            left: header(file, pair.left),
            right: header(file, pair.right),
            table: overall_table(file.stats.as_ref(), pair),
        }
    }
}

fn header(file: &MatchFile, player_index: u32) -> PlayerHeader {
    let player = file.settings.player(player_index);
    let names = extract_player_names(player_index, &file.settings, file.metadata.as_ref());
    let backup = player.map_or("Player", |p| p.backup_name());

    PlayerHeader {
        player_index,
        name: names.long_label(backup).to_string(),
        character_id: player.and_then(|p| p.character_id).unwrap_or(0),
        character_color: player.and_then(|p| p.character_color).unwrap_or(0),
    }
}
