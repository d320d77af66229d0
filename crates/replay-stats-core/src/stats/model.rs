//! Data models for match statistics

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::{self, Path};

/// Statistics for a whole match, keyed by category (`overall`, `actionCounts`, ...)
///
/// The shape belongs to the replay parser; this crate only reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsBundle(Value);

impl StatsBundle {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Records of one category, empty when the category is missing
    pub fn category(&self, category: &Path) -> &[Value] {
        path::get_array(&self.0, category)
    }
}

impl From<Value> for StatsBundle {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A count over a total with its precomputed quotient
///
/// `ratio` is `None` exactly when `total` is zero. The parser guarantees
/// this and it is not re-checked here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    pub ratio: Option<f64>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total: u64,
}

impl Ratio {
    /// Read a ratio object, `None` when `value` is not an object
    ///
    /// A missing `ratio` key is read the same as an explicit null.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            ratio: object.get("ratio").and_then(Value::as_f64),
            count: object.get("count").and_then(Value::as_u64).unwrap_or(0),
            total: object.get("total").and_then(Value::as_u64).unwrap_or(0),
        })
    }
}

/// The two competitors compared side by side, by player index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitorPair {
    pub left: u32,
    pub right: u32,
}

impl CompetitorPair {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// The pair with sides swapped
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

impl Default for CompetitorPair {
    fn default() -> Self {
        Self { left: 0, right: 1 }
    }
}
