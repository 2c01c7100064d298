//! Key and value transforms over a single map.

use crate::error::{Error, Result};
use crate::value::{Map, Value};

/// Builds a new map whose keys are `f(key, value)`.
///
/// If two keys map to the same new key, the entry seen later in iteration
/// order wins, keeping the position of the first.
pub fn map_keys<F>(map: &Map, mut f: F) -> Map
where
    F: FnMut(&str, &Value) -> String,
{
    map.iter()
        .map(|(key, value)| (f(key, value), value.clone()))
        .collect()
}

/// Builds a new map with the same keys and values `f(value, key)`.
pub fn map_values<F>(map: &Map, mut f: F) -> Map
where
    F: FnMut(&Value, &str) -> Value,
{
    map.iter()
        .map(|(key, value)| (key.clone(), f(value, key)))
        .collect()
}

/// Calls `f(key, value)` for every entry in iteration order.
pub fn for_each<F>(map: &Map, mut f: F)
where
    F: FnMut(&str, &Value),
{
    for (key, value) in map.iter() {
        f(key, value);
    }
}

/// Keeps the entries for which `condition(key, value)` holds.
pub fn filter<F>(map: &Map, mut condition: F) -> Map
where
    F: FnMut(&str, &Value) -> bool,
{
    map.iter()
        .filter(|(key, value)| condition(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns the first key for which `condition(key, value)` holds.
pub fn find_key<F>(map: &Map, mut condition: F) -> Option<&str>
where
    F: FnMut(&str, &Value) -> bool,
{
    map.iter()
        .find(|(key, value)| condition(key, value))
        .map(|(key, _)| key.as_str())
}

/// Returns a map with only the listed keys that exist in `map`, in the
/// order they are listed.
pub fn pick<I, S>(map: &Map, keys: I) -> Map
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .filter_map(|key| {
            let key = key.as_ref();
            map.get(key).map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}

/// Returns a copy of `map` without the listed keys.
pub fn omit<I, S>(map: &Map, keys: I) -> Map
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = map.clone();
    for key in keys {
        result.delete(key.as_ref());
    }
    result
}

/// Like [`pick`], but every listed key must be present.
pub fn require_keys<I, S>(map: &Map, keys: I) -> Result<Map>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Map::new();
    for key in keys {
        let key = key.as_ref();
        let value = map.get(key).ok_or_else(|| Error::missing_key(key))?;
        result.set(key, value.clone());
    }
    Ok(result)
}

/// Builds a map from key/value pairs. A repeated key keeps its first
/// position and its last value.
pub fn from_pairs<I, K>(pairs: I) -> Map
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(key, value)| (key.into(), value)).collect()
}

/// Returns the entries of `map` as key/value pairs.
pub fn to_pairs(map: &Map) -> Vec<(String, Value)> {
    map.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Swaps keys and values.
///
/// Values must be scalars; strings become keys verbatim and other scalars
/// use their JSON text (`1`, `true`, `null`). A float with no fractional
/// part renders like the equal integer, so `1` and `1.0` share the key `1`.
/// Fails instead of overwriting when two values produce the same key.
pub fn invert(map: &Map) -> Result<Map> {
    let mut inverted = Map::new();
    for (key, value) in map.iter() {
        let new_key = match value {
            Value::String(s) => s.clone(),
            Value::List(_) | Value::Map(_) => {
                return Err(Error::type_mismatch("invert", "scalar", value.kind()));
            }
            scalar => match scalar.as_exact_int() {
                Some(i) => i.to_string(),
                None => scalar.to_string(),
            },
        };
        if let Some(first) = inverted.get(&new_key) {
            let first = first.as_str().unwrap_or_default();
            return Err(Error::duplicate_value(new_key.as_str(), first, key.as_str()));
        }
        inverted.set(new_key, key.as_str());
    }
    Ok(inverted)
}

/// Rebuilds `map` recursively, replacing every non-map value with
/// `f(key, value)`. Lists are passed to `f` whole.
pub fn deep_map<F>(map: &Map, mut f: F) -> Map
where
    F: FnMut(&str, &Value) -> Value,
{
    deep_map_with(map, &mut f)
}

fn deep_map_with<F>(map: &Map, f: &mut F) -> Map
where
    F: FnMut(&str, &Value) -> Value,
{
    map.iter()
        .map(|(key, value)| {
            let mapped = match value {
                Value::Map(child) => Value::Map(deep_map_with(child, f)),
                other => f(key, other),
            };
            (key.clone(), mapped)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn map(json: serde_json::Value) -> Map {
        Value::from(json).as_map().cloned().unwrap_or_default()
    }

    #[test]
    fn test_map_keys() {
        let data = map(json!({"firstName": "Hannah", "lastName": "Jackson"}));
        let upper = map_keys(&data, |key, _| key.to_uppercase());
        assert_eq!(upper, map(json!({"FIRSTNAME": "Hannah", "LASTNAME": "Jackson"})));
    }

    #[test]
    fn test_map_keys_collision_later_wins() {
        let data = map(json!({"a": 1, "b": 2, "c": 3}));
        let collapsed = map_keys(&data, |key, _| if key == "c" { "c".into() } else { "x".into() });
        assert_eq!(collapsed, map(json!({"x": 2, "c": 3})));
        let keys: Vec<&String> = collapsed.keys().collect();
        assert_eq!(keys, vec!["x", "c"]);
    }

    #[test]
    fn test_map_values() {
        let info = map(json!({"name": "Isaac", "age": 55}));
        let tagged = map_values(&info, |value, key| {
            let text = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
            Value::from(format!("{}-{}", key, text))
        });
        assert_eq!(tagged, map(json!({"name": "name-Isaac", "age": "age-55"})));
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let data = map(json!({"a": 1, "b": 2, "c": 3}));
        let mut seen = Vec::new();
        for_each(&data, |key, value| seen.push(format!("{}: {}", key, value)));
        assert_eq!(seen, vec!["a: 1", "b: 2", "c: 3"]);
    }

    #[test]
    fn test_filter_and_find_key() {
        let data = map(json!({"a": 1, "b": 2, "c": 3}));
        let big = filter(&data, |_, value| value.as_int().is_some_and(|n| n > 1));
        assert_eq!(big, map(json!({"b": 2, "c": 3})));

        assert_eq!(find_key(&data, |_, value| value.as_int() == Some(3)), Some("c"));
        assert_eq!(find_key(&data, |key, _| key == "z"), None);
    }

    #[test]
    fn test_pick_and_omit() {
        let user = map(json!({"name": "David", "age": 40, "city": "Chicago"}));
        assert_eq!(
            pick(&user, ["name", "city", "missing"]),
            map(json!({"name": "David", "city": "Chicago"}))
        );
        assert_eq!(omit(&user, ["age"]), map(json!({"name": "David", "city": "Chicago"})));
        assert_eq!(omit(&user, Vec::<String>::new()), user);
    }

    #[test]
    fn test_require_keys() {
        let data = map(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(require_keys(&data, ["a", "b"]).unwrap(), map(json!({"a": 1, "b": 2})));
        assert_eq!(
            require_keys(&data, ["a", "d", "e"]).unwrap_err(),
            Error::missing_key("d")
        );
    }

    #[test]
    fn test_pairs() {
        let built = from_pairs([("a", Value::Int(1)), ("b", Value::Int(2)), ("a", Value::Int(3))]);
        assert_eq!(built, map(json!({"a": 3, "b": 2})));
        assert_eq!(
            to_pairs(&built),
            vec![("a".to_string(), Value::Int(3)), ("b".to_string(), Value::Int(2))]
        );
    }

    #[test]
    fn test_invert() {
        let fruits = map(json!({"a": "apple", "b": "banana", "c": 1, "d": true}));
        assert_eq!(
            invert(&fruits).unwrap(),
            map(json!({"apple": "a", "banana": "b", "1": "c", "true": "d"}))
        );
    }

    #[test]
    fn test_invert_duplicate_values() {
        let dup = map(json!({"a": "x", "b": "x"}));
        assert_eq!(invert(&dup).unwrap_err(), Error::duplicate_value("x", "a", "b"));

        // "1" and 1 render to the same key
        let clash = map(json!({"a": "1", "b": 1}));
        assert!(matches!(invert(&clash), Err(Error::DuplicateValue { .. })));

        // 1 and 1.0 are equal numbers and must not both survive
        let numeric = map(json!({"a": 1, "b": 1.0}));
        assert_eq!(invert(&numeric).unwrap_err(), Error::duplicate_value("1", "a", "b"));
    }

    #[test]
    fn test_invert_float_keys() {
        let data = map(json!({"whole": 2.0, "half": 2.5}));
        assert_eq!(invert(&data).unwrap(), map(json!({"2": "whole", "2.5": "half"})));
    }

    #[test]
    fn test_invert_rejects_containers() {
        let nested = map(json!({"a": {"b": 1}}));
        assert_eq!(
            invert(&nested).unwrap_err(),
            Error::type_mismatch("invert", "scalar", "map")
        );
    }

    #[test]
    fn test_deep_map() {
        let data = map(json!({
            "person": {"name": "David", "age": 30},
            "location": "California",
            "l": [1]
        }));
        let mapped = deep_map(&data, |key, value| {
            let text = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
            Value::from(format!("{}-{}", text, key))
        });
        assert_eq!(
            mapped,
            map(json!({
                "person": {"name": "David-name", "age": "30-age"},
                "location": "California-location",
                "l": "[1]-l"
            }))
        );
    }
}
