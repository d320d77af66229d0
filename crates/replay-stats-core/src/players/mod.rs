//! Match participants: settings records, grouping into sides and names

mod group;
mod model;
mod names;

pub use group::{flatten_groups, group_competitors, GroupKey};
pub use model::*;
pub use names::{extract_player_names, PlayerNames};
