//! Nested path lookups over loosely-shaped JSON records
//!
//! Statistics bundles come from an external parser and are kept as
//! [`serde_json::Value`]. Every lookup here is total: a missing key, a
//! type mismatch or an out-of-range index resolves to `None` (or the
//! caller's default) instead of failing.

use std::fmt;

use serde_json::Value;

/// A sequence of keys into a nested record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    /// Build a path from a dot-separated string (`"overall.killCount"`)
    pub fn parse(dotted: &str) -> Self {
        Self(
            dotted
                .split('.')
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Build a path from explicit keys, without splitting on dots
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last key of the path, used as a column name
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl From<&str> for Path {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl From<&[&str]> for Path {
    fn from(keys: &[&str]) -> Self {
        Self::from_keys(keys.iter().copied())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Resolve `path` inside `value`
///
/// Object keys are matched by name; array elements by a numeric key.
/// An empty path returns `value` itself.
pub fn get<'a>(value: &'a Value, path: &Path) -> Option<&'a Value> {
    path.keys().iter().try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Resolve `path`, falling back to `default` when anything along the way is absent
pub fn get_or<'a>(value: &'a Value, path: &Path, default: &'a Value) -> &'a Value {
    get(value, path).unwrap_or(default)
}

/// Resolve `path` to a number
pub fn get_f64(value: &Value, path: &Path) -> Option<f64> {
    get(value, path).and_then(Value::as_f64)
}

/// Resolve `path` to a non-negative integer
pub fn get_u64(value: &Value, path: &Path) -> Option<u64> {
    get(value, path).and_then(Value::as_u64)
}

/// Resolve `path` to an array, empty when absent or not an array
pub fn get_array<'a>(value: &'a Value, path: &Path) -> &'a [Value] {
    get(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_dotted_path() {
        let path = Path::parse("overall.successfulConversions.ratio");
        assert_eq!(path.keys(), ["overall", "successfulConversions", "ratio"]);
        assert_eq!(path.leaf(), Some("ratio"));
        assert_eq!(path.to_string(), "overall.successfulConversions.ratio");
    }

    #[test]
    fn test_from_keys_keeps_dots() {
        let path = Path::from_keys(["a.b", "c"]);
        assert_eq!(path.keys().len(), 2);
    }

    #[test]
    fn test_get_nested() {
        let record = json!({ "a": { "b": { "c": 3 } } });
        assert_eq!(get(&record, &"a.b.c".into()), Some(&json!(3)));
        assert_eq!(get_f64(&record, &"a.b.c".into()), Some(3.0));
    }

    #[test]
    fn test_get_array_index() {
        let record = json!({ "players": [{ "port": 1 }, { "port": 4 }] });
        assert_eq!(get_u64(&record, &"players.1.port".into()), Some(4));
        assert_eq!(get(&record, &"players.7.port".into()), None);
        assert_eq!(get(&record, &"players.x".into()), None);
    }

    #[test]
    fn test_missing_path_uses_default() {
        let record = json!({ "a": 1 });
        let default = json!({});
        assert_eq!(get_or(&record, &"a.b.c".into(), &default), &default);
        assert_eq!(get(&record, &"missing".into()), None);
        assert!(get_array(&record, &"a".into()).is_empty());
    }

    #[test]
    fn test_empty_path_is_identity() {
        let record = json!([1, 2]);
        assert_eq!(get(&record, &Path::parse("")), Some(&record));
        assert_eq!(get_array(&record, &Path::parse("")).len(), 2);
    }
}
