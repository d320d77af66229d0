//! Interpretation of a single field spec into a row

use serde_json::Value;

use super::{Cell, FieldSpec, Row, ValueFormat};
use crate::format::{
    count_with_percent, join_composite, parse_float, percent_fraction, to_fixed, NOT_AVAILABLE,
    ZERO_RATIO,
};
use crate::highlight::Component;
use crate::path;
use crate::stats::{CompetitorPair, CompetitorRecords, Ratio, StatsBundle};

/// One side's value after resolution
struct Resolved {
    display: String,
    /// What the highlight rule compares
    key: Vec<Component>,
    /// False when the side shows a sentinel and can't be emphasized
    comparable: bool,
}

/// Render `spec` for the two competitors of `pair`
///
/// Missing categories, records and values never fail; they surface as
/// empty cells or sentinel text.
pub fn render_field(bundle: &StatsBundle, spec: &FieldSpec, pair: CompetitorPair) -> Row {
    let records = CompetitorRecords::new(bundle.category(&spec.category));

    let left = resolve(spec, records.record(pair.left));
    let right = resolve(spec, records.record(pair.right));

    Row {
        header: spec.header.clone(),
        left: cell(spec, &left, &right),
        right: cell(spec, &right, &left),
    }
}

fn cell(spec: &FieldSpec, own: &Resolved, opponent: &Resolved) -> Cell {
    let highlighted = own.comparable
        && spec
            .highlight
            .map_or(false, |rule| rule.evaluate(&own.key, &opponent.key));

    Cell {
        display: own.display.clone(),
        highlighted,
    }
}

fn resolve(spec: &FieldSpec, record: &Value) -> Resolved {
    match spec.format {
        ValueFormat::Raw => resolve_components(spec, record, None),
        ValueFormat::Fixed(precision) => resolve_components(spec, record, Some(precision)),
        ValueFormat::SimpleRatio => resolve_quotient(spec, record, 1, |_, quotient| {
            to_fixed(quotient, 1)
        }),
        ValueFormat::PercentFraction => {
            resolve_quotient(spec, record, 3, |ratio, _| percent_fraction(ratio))
        }
        ValueFormat::CountPercent => resolve_count(spec, record),
    }
}

/// Plain values in declared order; absent keys are left out
fn resolve_components(spec: &FieldSpec, record: &Value, precision: Option<usize>) -> Resolved {
    let key: Vec<Component> = spec
        .values
        .iter()
        .filter_map(|value_path| path::get(record, value_path))
        .map(Component::from_value)
        .map(|component| match (component, precision) {
            (Component::Number(n), Some(p)) => Component::Text(to_fixed(n, p)),
            (component, _) => component,
        })
        .collect();

    let parts: Vec<String> = key.iter().map(ToString::to_string).collect();

    Resolved {
        display: join_composite(&parts),
        key,
        comparable: true,
    }
}

fn ratio_at(spec: &FieldSpec, record: &Value) -> Option<Ratio> {
    spec.values
        .first()
        .and_then(|value_path| path::get(record, value_path))
        .and_then(Ratio::from_value)
}

/// Quotient of a ratio, compared at `precision` decimals
///
/// An undefined quotient compares as zero, a missing ratio as NaN.
fn resolve_quotient(
    spec: &FieldSpec,
    record: &Value,
    precision: usize,
    render: impl Fn(&Ratio, f64) -> String,
) -> Resolved {
    let ratio = ratio_at(spec, record);

    let compared = match ratio {
        Some(Ratio {
            ratio: Some(quotient),
            ..
        }) => parse_float(&to_fixed(quotient, precision)),
        Some(Ratio { ratio: None, .. }) => parse_float(ZERO_RATIO),
        None => f64::NAN,
    };
    let key = vec![Component::Number(compared)];

    match ratio {
        Some(r @ Ratio {
            ratio: Some(quotient),
            ..
        }) => Resolved {
            display: render(&r, quotient),
            key,
            comparable: true,
        },
        _ => Resolved {
            display: NOT_AVAILABLE.to_string(),
            key,
            comparable: false,
        },
    }
}

fn resolve_count(spec: &FieldSpec, record: &Value) -> Resolved {
    let ratio = ratio_at(spec, record);
    let count = ratio.map_or(0, |r| r.count);
    let quotient = ratio.and_then(|r| r.ratio);

    Resolved {
        display: count_with_percent(count, quotient),
        key: vec![Component::Number(count as f64)],
        comparable: true,
    }
}
