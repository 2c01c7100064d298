//! Key-level difference between two maps.

use super::equality::deep_equal;
use crate::value::Map;

/// Returns the entries that differ between `a` and `b`.
///
/// The result holds every key of `a` that is absent from `b` or whose
/// value differs, mapped to `a`'s value, followed by every key only present
/// in `b`, mapped to `b`'s value. Nested maps are not descended into: a
/// changed nested map is reported whole, with `a`'s version. Use
/// [`compare`](super::compare) for per-leaf paths.
pub fn diff(a: &Map, b: &Map) -> Map {
    let mut result = Map::new();
    for (key, left) in a.iter() {
        let same = b.get(key).is_some_and(|right| deep_equal(left, right));
        if !same {
            result.set(key.clone(), left.clone());
        }
    }
    for (key, right) in b.iter() {
        if !a.has(key) {
            result.set(key.clone(), right.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn map(json: serde_json::Value) -> Map {
        Value::from(json).as_map().cloned().unwrap_or_default()
    }

    #[test]
    fn test_diff_keeps_left_values() {
        let a = map(json!({"name": "Alice", "age": 25, "city": "New York"}));
        let b = map(json!({"name": "Alice", "age": 30, "country": "USA"}));
        assert_eq!(
            diff(&a, &b),
            map(json!({"age": 25, "city": "New York", "country": "USA"}))
        );
    }

    #[test]
    fn test_diff_identical_is_empty() {
        let a = map(json!({"a": {"b": [1, 2]}, "c": null}));
        assert!(diff(&a, &a.clone()).is_empty());
    }

    #[test]
    fn test_diff_nested_change_reported_whole() {
        let a = map(json!({"cfg": {"host": "a", "port": 80}}));
        let b = map(json!({"cfg": {"host": "a", "port": 81}}));
        assert_eq!(diff(&a, &b), map(json!({"cfg": {"host": "a", "port": 80}})));
    }

    #[test]
    fn test_diff_order() {
        let a = map(json!({"x": 1, "y": 2}));
        let b = map(json!({"z": 3, "y": 0}));
        let keys: Vec<String> = diff(&a, &b).keys().cloned().collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }
}
