//! Export functionality for rendered stats tables

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::table::{Row, TableDescriptor};

/// Export a table to pretty-printed JSON
pub fn export_json(table: &TableDescriptor, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(table)
        .map_err(|e| Error::Other(format!("Failed to serialize table: {}", e)))?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Export a table to CSV, one line per row
pub fn export_csv(table: &TableDescriptor, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_csv(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(table: &TableDescriptor, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(["Section", "Stat", "Left", "Right", "Highlight"])?;

    match table {
        TableDescriptor::Placeholder { message } => {
            writer.write_record(["", message.as_str(), "", "", ""])?;
        }
        TableDescriptor::Stats { sections } => {
            for section in sections {
                for row in &section.rows {
                    writer.write_record([
                        section.title.as_str(),
                        row.header.as_str(),
                        row.left.display.as_str(),
                        row.right.display.as_str(),
                        highlight_label(row),
                    ])?;
                }
            }
        }
    }

    Ok(())
}

fn highlight_label(row: &Row) -> &'static str {
    match (row.left.highlighted, row.right.highlighted) {
        (true, true) => "both",
        (true, false) => "left",
        (false, true) => "right",
        (false, false) => "",
    }
}

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(Error::Other(format!(
                "Invalid export format '{}'. Use: json or csv",
                s
            ))),
        }
    }
}

impl ExportFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }

    /// Export a table using this format
    pub fn export(&self, table: &TableDescriptor, path: &Path) -> Result<()> {
        match self {
            ExportFormat::Json => export_json(table, path),
            ExportFormat::Csv => export_csv(table, path),
        }
    }
}
