//! Composition of section specs into a full table

use super::{overall_sections, render_field, Section, SectionSpec, TableDescriptor};
use crate::stats::{CompetitorPair, StatsBundle};

/// Shown in place of the table when a match has no statistics
pub const PLACEHOLDER_MESSAGE: &str = "An Error Occurred!";

/// Render every section and field in declaration order
///
/// A missing bundle is not rendered field by field; the whole table
/// becomes a placeholder.
pub fn compose(
    bundle: Option<&StatsBundle>,
    sections: &[SectionSpec],
    pair: CompetitorPair,
) -> TableDescriptor {
    let Some(bundle) = bundle else {
        tracing::debug!("No statistics for match, rendering placeholder");
        return TableDescriptor::placeholder();
    };

    let sections = sections
        .iter()
        .map(|spec| Section {
            title: spec.title.clone(),
            rows: spec
                .fields
                .iter()
                .map(|field| render_field(bundle, field, pair))
                .collect(),
        })
        .collect();

    TableDescriptor::Stats { sections }
}

/// The standard Offense / Defense / Neutral / General table
pub fn overall_table(bundle: Option<&StatsBundle>, pair: CompetitorPair) -> TableDescriptor {
    compose(bundle, &overall_sections(), pair)
}
