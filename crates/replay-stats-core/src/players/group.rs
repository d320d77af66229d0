//! Grouping of competitors into sides for list display

use serde::{Deserialize, Serialize};

use super::Competitor;

/// What puts two competitors on the same side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    /// Teams game; competitors without a team share the `None` group
    Team(Option<u32>),
    /// Free-for-all; each port is its own side
    Port(u32),
}

impl GroupKey {
    pub fn of(competitor: &Competitor, is_teams: bool) -> Self {
        if is_teams {
            GroupKey::Team(competitor.team_id)
        } else {
            GroupKey::Port(competitor.port)
        }
    }
}

/// Partition `players` into sides
///
/// Groups appear in the order their first member appears, and members keep
/// their original relative order.
pub fn group_competitors(players: &[Competitor], is_teams: bool) -> Vec<Vec<&Competitor>> {
    let mut keys: Vec<GroupKey> = Vec::new();
    let mut groups: Vec<Vec<&Competitor>> = Vec::new();

    for player in players {
        let key = GroupKey::of(player, is_teams);
        match keys.iter().position(|k| *k == key) {
            Some(i) => groups[i].push(player),
            None => {
                keys.push(key);
                groups.push(vec![player]);
            }
        }
    }

    groups
}

/// Back to a single sequence, teammates adjacent
pub fn flatten_groups<'a>(groups: Vec<Vec<&'a Competitor>>) -> Vec<&'a Competitor> {
    groups.into_iter().flatten().collect()
}
