//! replay-stats - Side-by-side statistics for recorded matches
//!
//! Usage:
//!   replay-stats [<dir>]          Browse match files in a TUI (default)
//!   replay-stats --cli <cmd>      Run CLI mode (headless)
//!   replay-stats --help           Show help

use std::fs::File;
use std::path::PathBuf;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod app;
mod cli;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

#[cfg(test)]
mod tui_test;

use app::App;
use replay_stats_core::Config;

const LOG_FILE: &str = "replay-stats.log";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Check for --cli flag first so `--cli --help` reaches the CLI help
    if let Some(cli_pos) = args.iter().position(|a| a == "--cli") {
        let cli_args: Vec<String> = args.iter().skip(cli_pos + 1).cloned().collect();

        if cli_args.is_empty() || cli_args.iter().any(|a| a == "--help" || a == "-h") {
            cli::print_help();
            return Ok(());
        }

        init_cli_logging();
        match cli::parse_args(&cli_args) {
            Ok((command, options)) => {
                return cli::run(command, options);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                cli::print_help();
                std::process::exit(1);
            }
        }
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let dir = args.iter().skip(1).find(|a| !a.starts_with('-')).map(PathBuf::from);

    // Default: TUI mode
    tui::install_panic_hook();
    init_logging();
    let result = run(dir);
    tui::restore()?;
    result
}

fn print_help() {
    println!("replay-stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Compare two players' statistics from recorded matches");
    println!();
    println!("USAGE:");
    println!("    replay-stats [OPTIONS] [<dir>]");
    println!();
    println!("ARGS:");
    println!("    <dir>           Directory of match files (default: configured replay_dir,");
    println!("                    else the current directory)");
    println!();
    println!("OPTIONS:");
    println!("    --cli <cmd>     Run in CLI mode (headless, for scripting)");
    println!("    --help          Show this help message");
    println!();
    println!("By default, replay-stats runs in TUI (terminal) mode.");
    println!();
    println!("For CLI mode help: replay-stats --cli --help");
}

fn init_logging() {
    // For TUI apps, log to a file to avoid corrupting the terminal display
    if let Ok(log_file) = File::create(LOG_FILE) {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::WARN)
            .with_target(false)
            .with_ansi(false)
            .with_writer(log_file.with_max_level(Level::WARN))
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

/// CLI output goes to stdout, so logs go to stderr, filtered by RUST_LOG
fn init_cli_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(dir: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load();
    theme::set_theme(config.theme);

    let dir = dir
        .or_else(|| config.replay_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut app = App::new(config);
    app.load_directory(&dir);

    let mut terminal = tui::init()?;
    tui::run(&mut terminal, &mut app)?;

    if app.config_changed {
        if let Err(e) = app.config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    Ok(())
}
