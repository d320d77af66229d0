//! Side-by-side statistics tables
//!
//! A table is described as data: each [`FieldSpec`] names where a
//! statistic lives in the bundle, how it is formatted and which rule
//! decides the highlighted side. [`render_field`] interprets one spec into
//! a [`Row`]; [`compose`] runs a list of [`SectionSpec`]s into a
//! [`TableDescriptor`] that front ends draw as-is.

mod catalogue;
mod compose;
mod render;

pub use catalogue::{defense_section, general_section, neutral_section, offense_section, overall_sections};
pub use compose::{compose, overall_table, PLACEHOLDER_MESSAGE};
pub use render::render_field;

use serde::{Deserialize, Serialize};

use crate::highlight::Highlight;
use crate::path::Path;

/// How the resolved value of a field is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Components as they appear in the record, joined with " / "
    Raw,
    /// Numeric components at a fixed precision, joined with " / "
    Fixed(usize),
    /// A ratio's quotient at one decimal
    SimpleRatio,
    /// A ratio as `"{pct}% ({count} / {total})"`
    PercentFraction,
    /// A ratio's count with its whole percentage
    CountPercent,
}

impl ValueFormat {
    /// Whether the field reads a single ratio object instead of plain values
    pub fn is_ratio(&self) -> bool {
        matches!(
            self,
            ValueFormat::SimpleRatio | ValueFormat::PercentFraction | ValueFormat::CountPercent
        )
    }
}

/// Declarative description of one table row
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub header: String,
    /// Category array holding the per-competitor records
    pub category: Path,
    /// Value path(s) inside a record; several make a composite field
    pub values: Vec<Path>,
    pub format: ValueFormat,
    pub highlight: Option<Highlight>,
}

impl FieldSpec {
    /// Plain values read straight from the record
    pub fn values(header: &str, category: &str, values: &[&str]) -> Self {
        Self {
            header: header.to_string(),
            category: Path::parse(category),
            values: values.iter().map(|v| Path::parse(v)).collect(),
            format: ValueFormat::Raw,
            highlight: None,
        }
    }

    /// A ratio object rendered with one of the ratio formats
    pub fn ratio(header: &str, category: &str, value: &str, format: ValueFormat) -> Self {
        Self {
            header: header.to_string(),
            category: Path::parse(category),
            values: vec![Path::parse(value)],
            format,
            highlight: None,
        }
    }

    /// Render numeric components with `precision` decimals
    pub fn fixed(mut self, precision: usize) -> Self {
        self.format = ValueFormat::Fixed(precision);
        self
    }

    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

/// A titled, ordered group of fields
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl SectionSpec {
    pub fn new(title: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }
}

/// One competitor's cell in a row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub display: String,
    pub highlighted: bool,
}

/// A rendered statistic row: header plus left and right cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub header: String,
    pub left: Cell,
    pub right: Cell,
}

impl Row {
    pub fn cells(&self) -> [&Cell; 2] {
        [&self.left, &self.right]
    }
}

/// A rendered section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

/// Fully rendered comparison table for one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableDescriptor {
    Stats { sections: Vec<Section> },
    /// Shown instead of the table when the match has no statistics
    Placeholder { message: String },
}

impl TableDescriptor {
    pub fn placeholder() -> Self {
        TableDescriptor::Placeholder {
            message: PLACEHOLDER_MESSAGE.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableDescriptor::Placeholder { .. })
    }

    /// Rendered sections, empty for a placeholder
    pub fn sections(&self) -> &[Section] {
        match self {
            TableDescriptor::Stats { sections } => sections,
            TableDescriptor::Placeholder { .. } => &[],
        }
    }

    /// Find a row by its header
    pub fn row(&self, header: &str) -> Option<&Row> {
        self.sections()
            .iter()
            .flat_map(|section| section.rows.iter())
            .find(|row| row.header == header)
    }
}
