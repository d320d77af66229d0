//! Emphasis rules deciding which competitor "wins" a statistic row
//!
//! Each rule is evaluated once per side with `(own, opponent)`. The
//! built-in rules are strict, so a tie highlights neither side.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::format::{js_number, parse_float, parse_int};

/// One resolved component of a field value
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Number(f64),
    Text(String),
    Null,
}

impl Component {
    /// Convert a raw record value; arrays and objects keep their JSON text
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Component::Null,
            Value::Number(n) => n.as_f64().map_or(Component::Null, Component::Number),
            Value::String(s) => Component::Text(s.clone()),
            Value::Bool(b) => Component::Text(b.to_string()),
            other => Component::Text(other.to_string()),
        }
    }

    /// Numeric reading of the component, `NaN` when it has none
    pub fn as_number(&self) -> f64 {
        match self {
            Component::Number(n) => *n,
            Component::Text(s) => parse_float(s),
            Component::Null => 0.0,
        }
    }

    /// Loose ordering: text against text is lexicographic, anything
    /// else compares numerically and is unordered when either side is NaN
    fn loose_cmp(&self, other: &Component) -> Option<Ordering> {
        match (self, other) {
            (Component::Text(a), Component::Text(b)) => Some(a.cmp(b)),
            _ => self.as_number().partial_cmp(&other.as_number()),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(n) => write!(f, "{}", js_number(*n)),
            Component::Text(s) => write!(f, "{}", s),
            Component::Null => Ok(()),
        }
    }
}

/// Custom rule over the resolved components of both sides
pub type ComponentPredicate = fn(&[Component], &[Component]) -> bool;

/// Highlight rule attached to a field
#[derive(Clone, Copy)]
pub enum Highlight {
    /// Larger first component wins; a present value beats a missing one
    HigherWins,
    /// Smaller first component wins; a present value beats a missing one
    LowerWins,
    /// Larger count wins, missing counts read as zero
    HigherCountWins,
    Custom(ComponentPredicate),
}

impl Highlight {
    /// Whether the side holding `own` is emphasized against `opponent`
    pub fn evaluate(&self, own: &[Component], opponent: &[Component]) -> bool {
        match self {
            Highlight::HigherWins => higher_wins(first_number(own), first_number(opponent)),
            Highlight::LowerWins => lower_wins(first_number(own), first_number(opponent)),
            Highlight::HigherCountWins => {
                higher_count_wins(first_count(own), first_count(opponent))
            }
            Highlight::Custom(predicate) => predicate(own, opponent),
        }
    }
}

impl fmt::Debug for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Highlight::HigherWins => write!(f, "HigherWins"),
            Highlight::LowerWins => write!(f, "LowerWins"),
            Highlight::HigherCountWins => write!(f, "HigherCountWins"),
            Highlight::Custom(_) => write!(f, "Custom"),
        }
    }
}

fn first_number(components: &[Component]) -> f64 {
    components.first().map_or(f64::NAN, Component::as_number)
}

fn first_count(components: &[Component]) -> u64 {
    let n = first_number(components);
    if n.is_finite() && n > 0.0 {
        n as u64
    } else {
        0
    }
}

/// Non-zero and not NaN
pub fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// `value > opponent`, or a truthy `value` against a NaN opponent
///
/// An opponent without data parses to NaN, which would otherwise never
/// compare; a present value is treated as winning outright.
pub fn higher_wins(value: f64, opponent: f64) -> bool {
    let opponent_missing = is_truthy(value) && opponent.is_nan();
    opponent_missing || value > opponent
}

/// `value < opponent`, with the same NaN-opponent override as [`higher_wins`]
pub fn lower_wins(value: f64, opponent: f64) -> bool {
    let opponent_missing = is_truthy(value) && opponent.is_nan();
    opponent_missing || value < opponent
}

pub fn higher_count_wins(count: u64, opponent: u64) -> bool {
    count > opponent
}

/// First component strictly greater; false when either side has none
pub fn first_component_higher(own: &[Component], opponent: &[Component]) -> bool {
    match (own.first(), opponent.first()) {
        (Some(a), Some(b)) => a.loose_cmp(b) == Some(Ordering::Greater),
        _ => false,
    }
}

/// Integer part of the first component strictly greater
///
/// Used for large totals shown with a decimal, where comparing the
/// floating value would let display artifacts decide the winner.
pub fn integer_part_higher(own: &[Component], opponent: &[Component]) -> bool {
    match (own.first(), opponent.first()) {
        (Some(a), Some(b)) => parse_int(&a.to_string()) > parse_int(&b.to_string()),
        _ => false,
    }
}
