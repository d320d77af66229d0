//! Integration tests for the browse-then-compare workflow.
//!
//! These tests verify end-to-end functionality from match files on disk
//! to rendered list rows, comparison tables and exports.

use replay_stats_core::listing::{FileRow, MatchComparison, ReplayScanner};
use replay_stats_core::{CompetitorPair, ExportFormat, TableDescriptor};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture holding a directory of match files.
struct TestFixture {
    _temp_dir: TempDir,
    replay_dir: PathBuf,
    export_dir: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let replay_dir = temp_dir.path().join("replays");
        let export_dir = temp_dir.path().join("exports");
        fs::create_dir_all(&replay_dir).expect("Failed to create replay dir");
        fs::create_dir_all(&export_dir).expect("Failed to create export dir");

        Self {
            _temp_dir: temp_dir,
            replay_dir,
            export_dir,
        }
    }

    fn write_match(&self, name: &str, document: Value) {
        fs::write(self.replay_dir.join(name), document.to_string())
            .expect("Failed to write match file");
    }
}

fn singles_match() -> Value {
    json!({
        "settings": {
            "isTeams": false,
            "players": [
                { "playerIndex": 0, "port": 1, "type": 0, "characterId": 2, "characterColor": 0, "connectCode": "FOX#1" },
                { "playerIndex": 1, "port": 2, "type": 0, "characterId": 20, "characterColor": 3, "nametag": "MARTH" }
            ]
        },
        "metadata": {
            "startAt": "2020-06-19T04:20:00Z",
            "players": { "0": { "names": { "netplay": "Fox Main", "code": "FOX#1" } } }
        },
        "stats": {
            "overall": [
                {
                    "playerIndex": 1,
                    "killCount": 4,
                    "totalDamage": 530.2,
                    "successfulConversions": { "ratio": 0.4, "count": 8, "total": 20 },
                    "openingsPerKill": { "ratio": 5.0, "count": 20, "total": 4 },
                    "damagePerOpening": { "ratio": 26.51, "count": 530, "total": 20 },
                    "neutralWinRatio": { "ratio": 0.55, "count": 11, "total": 20 },
                    "counterHitRatio": { "ratio": null, "count": 0, "total": 0 },
                    "beneficialTradeRatio": { "ratio": 0.5, "count": 1, "total": 2 },
                    "inputsPerMinute": { "ratio": 310.4, "count": 1241, "total": 4 },
                    "digitalInputsPerMinute": { "ratio": 120.1, "count": 480, "total": 4 }
                },
                {
                    "playerIndex": 0,
                    "killCount": 2,
                    "totalDamage": 410.7,
                    "successfulConversions": { "ratio": 0.2, "count": 3, "total": 15 },
                    "openingsPerKill": { "ratio": 7.5, "count": 15, "total": 2 },
                    "damagePerOpening": { "ratio": 27.38, "count": 410, "total": 15 },
                    "neutralWinRatio": { "ratio": 0.45, "count": 9, "total": 20 },
                    "counterHitRatio": { "ratio": 1.0, "count": 2, "total": 2 },
                    "beneficialTradeRatio": { "ratio": 0.5, "count": 1, "total": 2 },
                    "inputsPerMinute": { "ratio": 450.9, "count": 1803, "total": 4 },
                    "digitalInputsPerMinute": { "ratio": 200.3, "count": 801, "total": 4 }
                }
            ],
            "actionCounts": [
                { "playerIndex": 0, "rollCount": 1, "airDodgeCount": 3, "spotDodgeCount": 0,
                  "wavedashCount": 22, "wavelandCount": 9, "dashDanceCount": 41, "ledgegrabCount": 6 },
                { "playerIndex": 1, "rollCount": 4, "airDodgeCount": 2, "spotDodgeCount": 1,
                  "wavedashCount": 3, "wavelandCount": 12, "dashDanceCount": 17, "ledgegrabCount": 8 }
            ]
        }
    })
}

fn doubles_match_without_stats() -> Value {
    json!({
        "settings": {
            "isTeams": true,
            "players": [
                { "playerIndex": 0, "port": 1, "teamId": 1, "nametag": "AAAA" },
                { "playerIndex": 1, "port": 2, "teamId": 0, "nametag": "BBBB" },
                { "playerIndex": 2, "port": 3, "teamId": 1, "type": 1 },
                { "playerIndex": 3, "port": 4, "teamId": 0, "nametag": "DDDD" }
            ]
        },
        "stats": null
    })
}

#[test]
fn test_scan_and_build_rows() {
    let fixture = TestFixture::new();
    fixture.write_match("Game_2.json", doubles_match_without_stats());
    fixture.write_match("Game_1.json", singles_match());

    let result = ReplayScanner::new(&fixture.replay_dir)
        .scan()
        .expect("Scan failed");
    assert!(result.errors.is_empty());
    assert_eq!(result.files.len(), 2);

    let rows: Vec<FileRow> = result
        .files
        .iter()
        .map(|f| FileRow::from_file_in(f, &chrono::Utc))
        .collect();

    assert_eq!(rows[0].name, "Game_1.json");
    assert_eq!(rows[0].players_display(), "FOX#1, MARTH");
    assert_eq!(rows[0].date_display, "6/19/2020, 4:20:00 AM");

    assert_eq!(rows[1].name, "Game_2.json");
    assert_eq!(rows[1].players_display(), "AAAA, CPU, BBBB, DDDD");
    assert_eq!(rows[1].date_display, "1/1/1970, 12:00:00 AM");
}

#[test]
fn test_comparison_from_scanned_file() {
    let fixture = TestFixture::new();
    fixture.write_match("Game_1.json", singles_match());

    let result = ReplayScanner::new(&fixture.replay_dir).scan().unwrap();
    let comparison = MatchComparison::build(&result.files[0], CompetitorPair::default());

    assert_eq!(comparison.left.name, "Fox Main");
    assert_eq!(comparison.right.name, "MARTH");

    let table = &comparison.table;
    let kills = table.row("Kills").unwrap();
    assert_eq!((kills.left.display.as_str(), kills.right.display.as_str()), ("2", "4"));
    assert!(kills.right.highlighted && !kills.left.highlighted);

    let counter_hits = table.row("Counter Hits").unwrap();
    assert_eq!(counter_hits.left.display, "2 (100%)");
    assert_eq!(counter_hits.right.display, "0");
    assert!(counter_hits.left.highlighted);

    let trades = table.row("Beneficial Trades").unwrap();
    assert!(!trades.left.highlighted && !trades.right.highlighted);

    let movement = table
        .row("Actions (Wavedash / Waveland / Dash Dance / Ledgegrab)")
        .unwrap();
    assert_eq!(movement.left.display, "22 / 9 / 41 / 6");
    assert_eq!(movement.right.display, "3 / 12 / 17 / 8");
}

#[test]
fn test_swapped_pair_mirrors_table() {
    let fixture = TestFixture::new();
    fixture.write_match("Game_1.json", singles_match());
    let file = &ReplayScanner::new(&fixture.replay_dir).scan().unwrap().files[0];

    let forward = MatchComparison::build(file, CompetitorPair::default());
    let swapped = MatchComparison::build(file, CompetitorPair::new(1, 0));

    for (a, b) in forward.table.sections().iter().zip(swapped.table.sections()) {
        assert_eq!(a.title, b.title);
        for (ra, rb) in a.rows.iter().zip(&b.rows) {
            assert_eq!(ra.left, rb.right, "{}", ra.header);
            assert_eq!(ra.right, rb.left, "{}", ra.header);
        }
    }
}

#[test]
fn test_export_placeholder_and_table() {
    let fixture = TestFixture::new();
    fixture.write_match("Game_1.json", singles_match());
    fixture.write_match("Game_2.json", doubles_match_without_stats());
    let files = ReplayScanner::new(&fixture.replay_dir).scan().unwrap().files;

    let table = MatchComparison::build(&files[0], CompetitorPair::default()).table;
    let csv_path = fixture.export_dir.join("game1.csv");
    ExportFormat::Csv.export(&table, &csv_path).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 13);
    assert!(csv.contains("Offense,Kills,2,4,right"));

    let placeholder = MatchComparison::build(&files[1], CompetitorPair::default()).table;
    assert!(placeholder.is_placeholder());
    let json_path = fixture.export_dir.join("game2.json");
    ExportFormat::Json.export(&placeholder, &json_path).unwrap();
    let parsed: TableDescriptor =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed, TableDescriptor::placeholder());
}
