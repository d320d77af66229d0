//! CLI/headless mode for scripting and testing
//!
//! Usage:
//!   replay-stats --cli list [<dir>]              List match files
//!   replay-stats --cli stats <file>              Print the comparison table
//!   replay-stats --cli export <file> <out>       Write the table to a file
//!
//! Options:
//!   --players <l,r>    Player indices to compare (default from config, else 0,1)
//!   --format <fmt>     Export format: json or csv (default from <out>'s extension)
//!   --depth <n>        Directory levels scanned by `list`
//!   --json             Output in JSON format

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use replay_stats_core::listing::{FileRow, MatchComparison, MatchFile, ReplayScanner};
use replay_stats_core::{CompetitorPair, Config, ExportFormat, TableDescriptor};

/// Marker placed before a highlighted value in text output
const HIGHLIGHT_MARKER: char = '*';

/// CLI command to execute
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// `None` falls back to the configured replay directory
    List { dir: Option<PathBuf> },
    Stats { file: PathBuf },
    Export { file: PathBuf, output: PathBuf },
}

/// CLI options
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOptions {
    pub json: bool,
    pub players: Option<CompetitorPair>,
    pub format: Option<ExportFormat>,
    pub depth: Option<usize>,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut positionals: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--json" => options.json = true,
            "--players" | "--format" | "--depth" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(format!("{} requires a value", arg));
                };
                match arg.as_str() {
                    "--players" => options.players = Some(parse_players(value)?),
                    "--format" => {
                        options.format =
                            Some(value.parse::<ExportFormat>().map_err(|e| e.to_string())?)
                    }
                    _ => {
                        options.depth = Some(
                            value
                                .parse::<usize>()
                                .map_err(|_| format!("Invalid depth: {}", value))?,
                        )
                    }
                }
            }
            _ if arg.starts_with('-') => return Err(format!("Unknown option: {}", arg)),
            _ => positionals.push(arg.as_str()),
        }
        i += 1;
    }

    let command = match positionals.as_slice() {
        ["list"] => CliCommand::List { dir: None },
        ["list", dir] => CliCommand::List {
            dir: Some(PathBuf::from(*dir)),
        },
        ["stats", file] => CliCommand::Stats {
            file: PathBuf::from(*file),
        },
        ["stats"] => return Err("stats requires a match file".to_string()),
        ["export", file, output] => CliCommand::Export {
            file: PathBuf::from(*file),
            output: PathBuf::from(*output),
        },
        ["export", ..] => return Err("export requires a match file and an output path".to_string()),
        [] => {
            return Err(
                "No command specified. Use: list [<dir>], stats <file>, or export <file> <out>"
                    .to_string(),
            )
        }
        [command, ..] if !matches!(*command, "list" | "stats" | "export") => {
            return Err(format!("Unknown command: {}", command))
        }
        [command, ..] => return Err(format!("Too many arguments for {}", command)),
    };

    Ok((command, options))
}

/// Parse `left,right` player indices
fn parse_players(s: &str) -> Result<CompetitorPair, String> {
    let indices = s
        .split(',')
        .map(|id| {
            id.trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid player index: {}", id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match indices.as_slice() {
        [left, right] => Ok(CompetitorPair::new(*left, *right)),
        _ => Err(format!(
            "--players takes exactly two indices, e.g. 0,1 (got '{}')",
            s
        )),
    }
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    let config = Config::load();
    let pair = options.players.unwrap_or(config.competitors);

    match command {
        CliCommand::List { dir } => {
            let dir = dir.or(config.replay_dir).context(
                "No directory given and no replay_dir configured. Use: list <dir>",
            )?;
            run_list(dir, options.depth.unwrap_or(config.scan_depth), options)
        }
        CliCommand::Stats { file } => run_stats(file, pair, options),
        CliCommand::Export { file, output } => run_export(file, output, pair, options),
    }
}

fn run_list(dir: PathBuf, depth: usize, options: CliOptions) -> anyhow::Result<()> {
    let result = ReplayScanner::new(&dir).max_depth(depth).scan()?;
    let rows: Vec<FileRow> = result.files.iter().map(FileRow::from_file).collect();

    if options.json {
        println!(
            "{}",
            serde_json::json!({
                "directory": dir.to_string_lossy(),
                "files": rows,
                "errors": result.errors,
            })
        );
    } else {
        println!("{} match file(s) in {}", rows.len(), dir.display());
        println!();
        for row in &rows {
            println!("{:<40} {:<24} {}", row.name, row.date_display, row.players_display());
        }

        if !result.errors.is_empty() {
            eprintln!();
            for error in &result.errors {
                eprintln!("Warning: Skipped {}: {}", error.path.display(), error.message);
            }
        }
    }

    Ok(())
}

fn run_stats(file: PathBuf, pair: CompetitorPair, options: CliOptions) -> anyhow::Result<()> {
    let comparison = load_comparison(&file, pair)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print!("{}", format_comparison(&comparison));
    }

    Ok(())
}

fn run_export(
    file: PathBuf,
    output: PathBuf,
    pair: CompetitorPair,
    options: CliOptions,
) -> anyhow::Result<()> {
    let comparison = load_comparison(&file, pair)?;
    let format = options
        .format
        .unwrap_or_else(|| ExportFormat::from_path(&output));

    format
        .export(&comparison.table, &output)
        .with_context(|| format!("Failed to export to {}", output.display()))?;

    if options.json {
        println!(
            "{}",
            serde_json::json!({
                "output": output.to_string_lossy(),
                "format": format.extension(),
                "placeholder": comparison.table.is_placeholder(),
            })
        );
    } else {
        println!("Exported {} table to {}", format, output.display());
    }

    Ok(())
}

fn load_comparison(file: &Path, pair: CompetitorPair) -> anyhow::Result<MatchComparison> {
    let match_file = MatchFile::load(file)
        .with_context(|| format!("Failed to load match file {}", file.display()))?;
    if match_file.stats.is_none() {
        tracing::warn!("{} has no stats", file.display());
    }
    Ok(MatchComparison::build(&match_file, pair))
}

/// Render a comparison as aligned text, marking highlighted values
pub fn format_comparison(comparison: &MatchComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", comparison.file_name);
    let _ = writeln!(out);

    let sections = match &comparison.table {
        TableDescriptor::Placeholder { message } => {
            let _ = writeln!(out, "{}", message);
            return out;
        }
        TableDescriptor::Stats { sections } => sections,
    };

    let label_width = sections
        .iter()
        .flat_map(|s| s.rows.iter().map(|r| r.header.chars().count()))
        .max()
        .unwrap_or(0);
    let value_width = sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .flat_map(|r| r.cells())
        .map(|c| c.display.chars().count() + 1)
        .chain([
            comparison.left.name.chars().count(),
            comparison.right.name.chars().count(),
        ])
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{:<label_width$}  {:>value_width$}  {:>value_width$}",
        "", comparison.left.name, comparison.right.name,
    );

    for section in sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", section.title);
        let _ = writeln!(out, "{}", "-".repeat(label_width + 2 * value_width + 4));
        for row in &section.rows {
            let _ = writeln!(
                out,
                "{:<label_width$}  {:>value_width$}  {:>value_width$}",
                row.header,
                mark(&row.left),
                mark(&row.right),
            );
        }
    }

    out
}

fn mark(cell: &replay_stats_core::Cell) -> String {
    if cell.highlighted {
        format!("{}{}", HIGHLIGHT_MARKER, cell.display)
    } else {
        cell.display.clone()
    }
}

/// Print CLI help
pub fn print_help() {
    println!("replay-stats CLI Mode");
    println!();
    println!("USAGE:");
    println!("    replay-stats --cli <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    list [<dir>]                List match files with date and players");
    println!("    stats <file>                Print the comparison table for a match");
    println!("    export <file> <out>         Write the comparison table to a file");
    println!();
    println!("OPTIONS:");
    println!("    --players <l,r>             Player indices to compare (default 0,1)");
    println!("    --format <json|csv>         Export format (default from <out>'s extension)");
    println!("    --depth <n>                 Directory levels scanned by list");
    println!("    --json                      Output in JSON format");
    println!();
    println!("Highlighted values are prefixed with '{}'.", HIGHLIGHT_MARKER);
    println!();
    println!("EXAMPLES:");
    println!("    replay-stats --cli list ~/Slippi");
    println!("    replay-stats --cli stats Game_20200619T042000.json --players 1,0");
    println!("    replay-stats --cli export Game_20200619T042000.json out.csv");
    println!("    replay-stats --cli list ~/Slippi --json");
}
