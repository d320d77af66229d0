//! Display names for a player, from settings and online metadata

use serde::{Deserialize, Serialize};

use super::{GameMetadata, GameSettings};

/// Names known for one player; unknown parts are empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub name: String,
    pub tag: String,
    pub code: String,
}

impl PlayerNames {
    /// Connect code, then in-game tag, then `backup`
    pub fn short_label<'a>(&'a self, backup: &'a str) -> &'a str {
        [self.code.as_str(), self.tag.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(backup)
    }

    /// Full name, then the short label
    pub fn long_label<'a>(&'a self, backup: &'a str) -> &'a str {
        if self.name.is_empty() {
            self.short_label(backup)
        } else {
            &self.name
        }
    }
}

fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a String>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_default()
}

/// Resolve the names of `player_index`
///
/// Online metadata takes precedence over what the console recorded.
pub fn extract_player_names(
    player_index: u32,
    settings: &GameSettings,
    metadata: Option<&GameMetadata>,
) -> PlayerNames {
    let player = settings.player(player_index);
    let online = metadata.and_then(|m| m.player(player_index)).map(|p| &p.names);

    PlayerNames {
        name: first_present([
            online.and_then(|n| n.netplay.as_ref()),
            player.and_then(|p| p.display_name.as_ref()),
            player.and_then(|p| p.nametag.as_ref()),
        ]),
        tag: first_present([player.and_then(|p| p.nametag.as_ref())]),
        code: first_present([
            online.and_then(|n| n.code.as_ref()),
            player.and_then(|p| p.connect_code.as_ref()),
        ]),
    }
}
