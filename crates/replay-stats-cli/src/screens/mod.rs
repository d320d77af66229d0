//! Screen rendering and routing

mod browser;
mod help;
mod stats;

use ratatui::prelude::*;

use crate::app::{App, AppState};
use crate::widgets;

/// Render the current screen based on app state
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    widgets::render_header(frame, chunks[0], &header_context(app, &app.state));
    render_state(frame, chunks[1], &app.state, app);

    let hints = get_hints(&app.state);
    widgets::render_footer(frame, chunks[2], &hints, app.status_message.as_deref());
}

fn render_state(frame: &mut Frame, area: Rect, state: &AppState, app: &App) {
    match state {
        AppState::Browser { selected } => browser::render(frame, area, app, *selected),
        AppState::Stats {
            comparison, scroll, ..
        } => stats::render(frame, area, comparison, *scroll),
        AppState::Help { previous_state } => {
            render_state(frame, area, previous_state, app);
            help::render(frame, area);
        }
        AppState::Exiting => {}
    }
}

fn header_context(app: &App, state: &AppState) -> String {
    match state {
        AppState::Browser { .. } => app
            .replay_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        AppState::Stats { comparison, .. } => comparison.file_name.clone(),
        AppState::Help { previous_state } => header_context(app, previous_state),
        AppState::Exiting => String::new(),
    }
}

fn get_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state {
        AppState::Browser { .. } => vec![
            ("Enter", "Open"),
            ("j/k", "Navigate"),
            ("r", "Rescan"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        AppState::Stats { .. } => vec![
            ("Esc", "Back"),
            ("j/k", "Scroll"),
            ("s", "Swap"),
            ("e", "Export JSON"),
            ("c", "Export CSV"),
            ("q", "Quit"),
        ],
        AppState::Help { .. } => vec![("any key", "Close")],
        AppState::Exiting => vec![],
    }
}
