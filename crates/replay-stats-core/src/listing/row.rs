//! One line of the match file list

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::MatchFile;
use crate::players::{extract_player_names, flatten_groups, group_competitors};

/// Locale-default date and time layout for list rows
const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A competitor as shown in a list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPlayer {
    pub player_index: u32,
    pub port: u32,
    /// Connect code, tag, or "CPU"/"Player"
    pub label: String,
    pub character_id: u32,
    pub character_color: u32,
}

/// View model for a match file in the browser list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    pub name: String,
    pub date_display: String,
    /// Teammates adjacent, sides in first-appearance order
    pub players: Vec<RowPlayer>,
}

impl FileRow {
    /// Build a row with dates in the local time zone
    pub fn from_file(file: &MatchFile) -> Self {
        Self::from_file_in(file, &Local)
    }

    /// Build a row with dates rendered in `tz`
    pub fn from_file_in<Tz>(file: &MatchFile, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let settings = &file.settings;
        let groups = group_competitors(&settings.players, settings.is_teams);

        let players = flatten_groups(groups)
            .into_iter()
            .map(|player| {
                let names =
                    extract_player_names(player.player_index, settings, file.metadata.as_ref());
                RowPlayer {
                    player_index: player.player_index,
                    port: player.port,
                    label: names.short_label(player.backup_name()).to_string(),
                    character_id: player.character_id.unwrap_or(0),
                    character_color: player.character_color.unwrap_or(0),
                }
            })
            .collect();

        Self {
            name: file.name.clone(),
            date_display: format_start_time(file.start_time.as_deref(), tz),
            players,
        }
    }

    /// Player labels joined for single-line output
    pub fn players_display(&self) -> String {
        self.players
            .iter()
            .map(|p| p.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse a recorded start time
///
/// Accepts RFC 3339 and zone-less ISO timestamps; the latter are read as
/// UTC.
pub fn parse_start_time(start_time: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(start_time) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(start_time, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Render a start time in `tz`; missing or unreadable times show the epoch
pub fn format_start_time<Tz>(start_time: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc = start_time.and_then(|s| {
        let parsed = parse_start_time(s);
        if parsed.is_none() {
            tracing::debug!(start_time = s, "Unreadable start time");
        }
        parsed
    });

    utc.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .with_timezone(tz)
        .format(DATE_FORMAT)
        .to_string()
}
