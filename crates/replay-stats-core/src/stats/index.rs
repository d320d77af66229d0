//! Lookup of per-competitor records by player index

use std::collections::HashMap;

use serde_json::Value;

/// Key carrying the competitor's index in every per-competitor record
pub const PLAYER_INDEX_KEY: &str = "playerIndex";

static EMPTY_RECORD: Value = Value::Null;

/// Map each record to its player index
///
/// Later records win over earlier ones with the same index. Records
/// without a usable index are skipped.
pub fn index_by_competitor(records: &[Value]) -> HashMap<u32, &Value> {
    let mut by_index = HashMap::with_capacity(records.len());

    for record in records {
        let Some(index) = record
            .get(PLAYER_INDEX_KEY)
            .and_then(Value::as_u64)
            .and_then(|i| u32::try_from(i).ok())
        else {
            tracing::debug!("Skipping stat record without a player index");
            continue;
        };

        if by_index.insert(index, record).is_some() {
            tracing::debug!(index, "Duplicate stat record for player, keeping the last one");
        }
    }

    by_index
}

/// Indexed records of one statistics category
#[derive(Debug, Clone, Default)]
pub struct CompetitorRecords<'a> {
    by_index: HashMap<u32, &'a Value>,
}

impl<'a> CompetitorRecords<'a> {
    pub fn new(records: &'a [Value]) -> Self {
        Self {
            by_index: index_by_competitor(records),
        }
    }

    /// Record for `index`, or an empty record every lookup misses on
    pub fn record(&self, index: u32) -> &'a Value {
        self.by_index.get(&index).copied().unwrap_or(&EMPTY_RECORD)
    }

    /// Whether the category holds a record for `index`
    pub fn contains(&self, index: u32) -> bool {
        self.by_index.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }
}
