//! TUI Test Harness
//!
//! Provides programmatic control over the TUI for automated testing.
//! Uses ratatui's TestBackend to capture rendered output.

use std::io;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use replay_stats_core::listing::MatchFile;
use replay_stats_core::Config;
use serde_json::{json, Value};

use crate::app::{App, AppState};

/// Test harness for the TUI application
pub struct TuiTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl TuiTestHarness {
    /// Create a new test harness with the given terminal size
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let app = App::new(Config::default());

        Ok(Self { app, terminal })
    }

    /// Create with default size (120x40)
    pub fn default_size() -> io::Result<Self> {
        Self::new(120, 40)
    }

    /// Create with the given match files already listed
    pub fn with_files(files: Vec<MatchFile>) -> io::Result<Self> {
        let mut harness = Self::default_size()?;
        harness.app.set_files(files);
        Ok(harness)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Render the current frame and return the buffer contents as a string
    pub fn render(&mut self) -> io::Result<String> {
        self.terminal.draw(|frame| {
            self.app.render(frame);
        })?;

        let buffer = self.terminal.backend().buffer();
        let mut output = String::new();

        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let cell = &buffer[(x, y)];
                output.push_str(cell.symbol());
            }
            output.push('\n');
        }

        Ok(output)
    }

    /// Send a key press to the app
    pub fn press_key(&mut self, code: KeyCode) {
        let event = KeyEvent::new(code, KeyModifiers::NONE);
        self.app.handle_key(event);
    }

    pub fn enter(&mut self) {
        self.press_key(KeyCode::Enter);
    }

    pub fn escape(&mut self) {
        self.press_key(KeyCode::Esc);
    }

    pub fn up(&mut self) {
        self.press_key(KeyCode::Up);
    }

    pub fn down(&mut self) {
        self.press_key(KeyCode::Down);
    }

    pub fn char(&mut self, c: char) {
        self.press_key(KeyCode::Char(c));
    }

    /// Check if the rendered output contains a string
    pub fn screen_contains(&mut self, text: &str) -> io::Result<bool> {
        let output = self.render()?;
        Ok(output.contains(text))
    }

    /// Get the current state name
    pub fn state_name(&self) -> &'static str {
        match &self.app.state {
            AppState::Browser { .. } => "Browser",
            AppState::Stats { .. } => "Stats",
            AppState::Help { .. } => "Help",
            AppState::Exiting => "Exiting",
        }
    }

    /// Selected row when in the file list
    pub fn selected(&self) -> Option<usize> {
        match &self.app.state {
            AppState::Browser { selected } => Some(*selected),
            _ => None,
        }
    }

    /// Table scroll offset when viewing stats
    pub fn scroll(&self) -> Option<usize> {
        match &self.app.state {
            AppState::Stats { scroll, .. } => Some(*scroll),
            _ => None,
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.app.should_quit
    }
}

/// Test scenario builder for fluent test writing
pub struct TestScenario {
    harness: TuiTestHarness,
    steps: Vec<String>,
}

impl TestScenario {
    pub fn new(files: Vec<MatchFile>) -> io::Result<Self> {
        Ok(Self {
            harness: TuiTestHarness::with_files(files)?,
            steps: Vec::new(),
        })
    }

    fn log(&mut self, step: &str) {
        self.steps.push(step.to_string());
    }

    pub fn press_enter(mut self) -> Self {
        self.log("Press Enter");
        self.harness.enter();
        self
    }

    pub fn press_escape(mut self) -> Self {
        self.log("Press Escape");
        self.harness.escape();
        self
    }

    pub fn press_down(mut self) -> Self {
        self.log("Press Down");
        self.harness.down();
        self
    }

    pub fn press_char(mut self, c: char) -> Self {
        self.log(&format!("Press '{}'", c));
        self.harness.char(c);
        self
    }

    pub fn assert_state(mut self, expected: &str) -> Self {
        let actual = self.harness.state_name();
        assert_eq!(
            actual, expected,
            "Expected state '{}' but got '{}'\nSteps: {:?}",
            expected, actual, self.steps
        );
        self.log(&format!("Assert state = {}", expected));
        self
    }

    pub fn assert_screen_contains(mut self, text: &str) -> Self {
        let contains = self.harness.screen_contains(text).unwrap_or(false);
        assert!(
            contains,
            "Screen should contain '{}'\nSteps: {:?}",
            text, self.steps
        );
        self.log(&format!("Assert screen contains '{}'", text));
        self
    }

    /// Finish the scenario and return the harness
    pub fn finish(self) -> TuiTestHarness {
        self.harness
    }
}

fn ratio(ratio: Value, count: u64, total: u64) -> Value {
    json!({ "ratio": ratio, "count": count, "total": total })
}

fn overall(player_index: u32, kills: u64, damage: f64, neutral_wins: u64) -> Value {
    json!({
        "playerIndex": player_index,
        "killCount": kills,
        "totalDamage": damage,
        "successfulConversions": ratio(json!(0.25), 2, 8),
        "openingsPerKill": ratio(json!(4.0), 8, 2),
        "damagePerOpening": ratio(json!(30.5), 244, 8),
        "neutralWinRatio": ratio(json!(neutral_wins as f64 / 20.0), neutral_wins, 20),
        "counterHitRatio": ratio(Value::Null, 0, 0),
        "beneficialTradeRatio": ratio(json!(0.5), 1, 2),
        "inputsPerMinute": ratio(json!(250.0), 1000, 4),
        "digitalInputsPerMinute": ratio(json!(90.0), 360, 4)
    })
}

/// A singles match where port 1 ("Falcon") out-kills port 2 ("Sheik")
fn match_file(name: &str, with_stats: bool) -> MatchFile {
    let mut document = json!({
        "startTime": "2021-03-04T05:06:07Z",
        "settings": {
            "isTeams": false,
            "players": [
                { "playerIndex": 0, "port": 1, "type": 0, "characterId": 2, "nametag": "FALC", "displayName": "Falcon" },
                { "playerIndex": 1, "port": 2, "type": 0, "characterId": 7, "nametag": "SHEK", "displayName": "Sheik" }
            ]
        }
    });
    if with_stats {
        document["stats"] = json!({
            "overall": [overall(1, 1, 210.4, 8), overall(0, 3, 355.9, 12)],
            "actionCounts": [
                { "playerIndex": 0, "wavedashCount": 5, "wavelandCount": 2, "airDodgeCount": 1,
                  "dashDanceCount": 9, "spotDodgeCount": 0, "ledgegrabCount": 3, "rollCount": 4 },
                { "playerIndex": 1, "wavedashCount": 1, "wavelandCount": 6, "airDodgeCount": 2,
                  "dashDanceCount": 0, "spotDodgeCount": 1, "ledgegrabCount": 2, "rollCount": 0 }
            ]
        });
    }
    MatchFile::from_json(Path::new(name), &document.to_string())
        .expect("fixture should parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_files() -> Vec<MatchFile> {
        vec![match_file("Game_A.json", true), match_file("Game_B.json", false)]
    }

    #[test]
    fn test_harness_creation() {
        let harness = TuiTestHarness::default_size();
        assert!(harness.is_ok());
    }

    #[test]
    fn test_initial_state_is_browser() {
        let harness = TuiTestHarness::default_size().unwrap();
        assert_eq!(harness.state_name(), "Browser");
        assert_eq!(harness.selected(), Some(0));
    }

    #[test]
    fn test_empty_directory_message() {
        let mut harness = TuiTestHarness::default_size().unwrap();
        let output = harness.render().unwrap();
        assert!(output.contains("replay"));
        assert!(output.contains("No match files found"));
    }

    #[test]
    fn test_browser_lists_files_and_players() {
        let mut harness = TuiTestHarness::with_files(two_files()).unwrap();
        let output = harness.render().unwrap();
        assert!(output.contains("Matches (2)"));
        assert!(output.contains("Game_A.json"));
        assert!(output.contains("Game_B.json"));
        assert!(output.contains("FALC, SHEK"));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut harness = TuiTestHarness::with_files(two_files()).unwrap();
        harness.up();
        assert_eq!(harness.selected(), Some(0));
        harness.down();
        harness.down();
        harness.down();
        assert_eq!(harness.selected(), Some(1));
    }

    #[test]
    fn test_open_stats_and_return() {
        let harness = TestScenario::new(two_files())
            .unwrap()
            .press_enter()
            .assert_state("Stats")
            .assert_screen_contains("Falcon")
            .assert_screen_contains("Offense")
            .assert_screen_contains("Kills")
            .assert_screen_contains("Opening Conversion Rate")
            .assert_screen_contains("25% (2 / 8)")
            .press_escape()
            .assert_state("Browser")
            .finish();

        assert_eq!(harness.selected(), Some(0));
    }

    #[test]
    fn test_stats_highlight_follows_the_winner() {
        let mut harness = TuiTestHarness::with_files(two_files()).unwrap();
        harness.enter();

        let AppState::Stats { comparison, .. } = &harness.app().state else {
            panic!("expected stats screen");
        };
        let kills = comparison.table.row("Kills").unwrap();
        assert_eq!(kills.left.display, "3");
        assert!(kills.left.highlighted);
        assert!(!kills.right.highlighted);
    }

    #[test]
    fn test_swap_sides() {
        let mut harness = TuiTestHarness::with_files(two_files()).unwrap();
        harness.enter();
        harness.char('s');

        let AppState::Stats { comparison, .. } = &harness.app().state else {
            panic!("expected stats screen");
        };
        assert_eq!(comparison.left.name, "Sheik");
        assert_eq!(comparison.table.row("Kills").unwrap().left.display, "1");
        assert!(comparison.table.row("Kills").unwrap().right.highlighted);
    }

    #[test]
    fn test_missing_stats_shows_placeholder() {
        TestScenario::new(two_files())
            .unwrap()
            .press_down()
            .press_enter()
            .assert_state("Stats")
            .assert_screen_contains("An Error Occurred!");
    }

    #[test]
    fn test_scroll_stops_at_last_line() {
        let mut harness = TuiTestHarness::with_files(two_files()).unwrap();
        harness.enter();
        for _ in 0..50 {
            harness.down();
        }
        // 4 section titles + 12 rows
        assert_eq!(harness.scroll(), Some(15));
        harness.press_key(KeyCode::Home);
        assert_eq!(harness.scroll(), Some(0));
    }

    #[test]
    fn test_export_writes_into_export_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut harness = TuiTestHarness::with_files(two_files()).unwrap();
        harness.app_mut().export_dir = dir.path().to_path_buf();

        harness.enter();
        harness.char('c');

        let exported = dir.path().join("Game_A-stats.csv");
        assert!(exported.exists());
        let content = std::fs::read_to_string(exported).unwrap();
        assert!(content.starts_with("Section,Stat,Left,Right,Highlight"));
        assert!(harness.app().status_message.as_deref().unwrap().starts_with("Exported CSV"));
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        TestScenario::new(two_files())
            .unwrap()
            .press_char('?')
            .assert_state("Help")
            .assert_screen_contains("Keyboard Shortcuts")
            .press_char('x')
            .assert_state("Browser");
    }

    #[test]
    fn test_quit_from_stats() {
        let harness = TestScenario::new(two_files())
            .unwrap()
            .press_enter()
            .press_char('q')
            .assert_state("Exiting")
            .finish();
        assert!(harness.should_quit());
    }

    #[test]
    fn test_theme_cycle_marks_config_changed() {
        let mut harness = TuiTestHarness::with_files(two_files()).unwrap();
        harness.char('t');
        assert!(harness.app().config_changed);
        assert_ne!(harness.app().config.theme, Config::default().theme);
    }
}
