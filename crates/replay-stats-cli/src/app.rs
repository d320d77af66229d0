//! Application state and keyboard handling for the match browser

use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;
use ratatui::Frame;

use replay_stats_core::listing::{FileRow, MatchComparison, MatchFile, ReplayScanner, ScanError};
use replay_stats_core::{CompetitorPair, Config, ExportFormat, TableDescriptor};

use crate::{event, screens, theme};

/// Rows moved by PageUp / PageDown
const PAGE_SIZE: usize = 10;

/// Current screen and its local state
#[derive(Debug, Clone)]
pub enum AppState {
    /// File list
    Browser { selected: usize },
    /// Comparison table of one file
    Stats {
        /// Index into `App::files`, restored as the selection on return
        file_index: usize,
        comparison: Box<MatchComparison>,
        /// First visible table line
        scroll: usize,
    },
    Help {
        /// The state to return to when help is closed
        previous_state: Box<AppState>,
    },
    Exiting,
}

impl Default for AppState {
    fn default() -> Self {
        Self::Browser { selected: 0 }
    }
}

/// Main application struct
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    pub config: Config,
    /// Set when a setting worth persisting changed during the session
    pub config_changed: bool,
    pub replay_dir: Option<PathBuf>,
    pub files: Vec<MatchFile>,
    pub rows: Vec<FileRow>,
    pub scan_errors: Vec<ScanError>,
    pub pair: CompetitorPair,
    /// Where `e` / `c` write exported tables
    pub export_dir: PathBuf,
    /// One-shot message shown in the footer until the next key press
    pub status_message: Option<String>,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::default(),
            should_quit: false,
            pair: config.competitors,
            config,
            config_changed: false,
            replay_dir: None,
            files: Vec::new(),
            rows: Vec::new(),
            scan_errors: Vec::new(),
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            status_message: None,
            last_error: None,
        }
    }

    /// Scan a directory and show its match files
    pub fn load_directory(&mut self, dir: &Path) {
        self.replay_dir = Some(dir.to_path_buf());
        let scanner = ReplayScanner::new(dir).max_depth(self.config.scan_depth);

        match scanner.scan() {
            Ok(result) => {
                self.last_error = None;
                self.scan_errors = result.errors;
                self.set_files(result.files);
                if !self.scan_errors.is_empty() {
                    self.status_message =
                        Some(format!("Skipped {} unreadable file(s)", self.scan_errors.len()));
                }
            }
            Err(e) => {
                tracing::warn!("Scan of {} failed: {}", dir.display(), e);
                self.last_error = Some(e.to_string());
                self.scan_errors.clear();
                self.set_files(Vec::new());
            }
        }
    }

    /// Replace the listed files and return to the top of the list
    pub fn set_files(&mut self, files: Vec<MatchFile>) {
        self.rows = files.iter().map(FileRow::from_file).collect();
        self.files = files;
        self.state = AppState::Browser { selected: 0 };
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        // Any key closes help
        if let AppState::Help { previous_state } = &self.state {
            self.state = *previous_state.clone();
            return;
        }

        if event::is_quit(&key) {
            self.state = AppState::Exiting;
            self.should_quit = true;
            return;
        }

        if event::is_help(&key) {
            self.show_help();
            return;
        }

        match &self.state {
            AppState::Browser { selected } => {
                let selected = *selected;
                self.handle_browser_key(key, selected);
            }
            AppState::Stats { .. } => self.handle_stats_key(key),
            AppState::Help { .. } | AppState::Exiting => {}
        }
    }

    fn handle_browser_key(&mut self, key: KeyEvent, selected: usize) {
        let last = self.rows.len().saturating_sub(1);

        let next = if event::is_down(&key) {
            Some((selected + 1).min(last))
        } else if event::is_up(&key) {
            Some(selected.saturating_sub(1))
        } else if event::is_page_down(&key) {
            Some((selected + PAGE_SIZE).min(last))
        } else if event::is_page_up(&key) {
            Some(selected.saturating_sub(PAGE_SIZE))
        } else if event::is_home(&key) {
            Some(0)
        } else if event::is_end(&key) {
            Some(last)
        } else {
            None
        };

        if let Some(selected) = next {
            self.state = AppState::Browser { selected };
        } else if event::is_enter(&key) {
            self.open_file(selected);
        } else if event::is_key(&key, 'r') {
            if let Some(dir) = self.replay_dir.clone() {
                self.load_directory(&dir);
            }
        } else if event::is_key(&key, 't') {
            self.cycle_theme();
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        let AppState::Stats {
            file_index,
            comparison,
            scroll,
        } = &mut self.state
        else {
            return;
        };

        let max_scroll = table_line_count(&comparison.table).saturating_sub(1);
        let file_index = *file_index;

        if event::is_back(&key) {
            self.state = AppState::Browser {
                selected: file_index,
            };
        } else if event::is_down(&key) {
            *scroll = (*scroll + 1).min(max_scroll);
        } else if event::is_up(&key) {
            *scroll = scroll.saturating_sub(1);
        } else if event::is_page_down(&key) {
            *scroll = (*scroll + PAGE_SIZE).min(max_scroll);
        } else if event::is_page_up(&key) {
            *scroll = scroll.saturating_sub(PAGE_SIZE);
        } else if event::is_home(&key) {
            *scroll = 0;
        } else if event::is_end(&key) {
            *scroll = max_scroll;
        } else if event::is_key(&key, 's') {
            self.pair = self.pair.swapped();
            self.open_file(file_index);
        } else if event::is_key(&key, 'e') {
            self.export_current(ExportFormat::Json);
        } else if event::is_key(&key, 'c') {
            self.export_current(ExportFormat::Csv);
        } else if event::is_key(&key, 't') {
            self.cycle_theme();
        }
    }

    /// Build the comparison table for a listed file and show it
    fn open_file(&mut self, index: usize) {
        let Some(file) = self.files.get(index) else {
            return;
        };

        let comparison = MatchComparison::build(file, self.pair);
        if comparison.table.is_placeholder() {
            tracing::warn!("{} has no usable stats", file.full_path.display());
        }

        self.state = AppState::Stats {
            file_index: index,
            comparison: Box::new(comparison),
            scroll: 0,
        };
    }

    fn export_current(&mut self, format: ExportFormat) {
        let AppState::Stats { comparison, .. } = &self.state else {
            return;
        };

        let stem = Path::new(&comparison.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "match".to_string());
        let path = self
            .export_dir
            .join(format!("{}-stats.{}", stem, format.extension()));

        self.status_message = Some(match format.export(&comparison.table, &path) {
            Ok(()) => format!("Exported {} to {}", format, path.display()),
            Err(e) => {
                tracing::warn!("Export to {} failed: {}", path.display(), e);
                format!("Export failed: {}", e)
            }
        });
    }

    fn cycle_theme(&mut self) {
        let next = theme::current_theme_name().next();
        theme::set_theme(next);
        self.config.theme = next;
        self.config_changed = true;
        self.status_message = Some(format!("Theme: {}", next));
    }

    fn show_help(&mut self) {
        let previous_state = Box::new(self.state.clone());
        self.state = AppState::Help { previous_state };
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        screens::render(frame, self);
    }
}

/// Lines a stats table occupies: one title line per section plus its rows
pub fn table_line_count(table: &TableDescriptor) -> usize {
    table.sections().iter().map(|s| s.rows.len() + 1).sum()
}
