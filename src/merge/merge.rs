//! Recursive map merging.

use crate::compare::deep_equal;
use crate::error::Result;
use crate::value::{Map, Value};

/// Merges `values` from left to right into a new value.
///
/// Every input must be a map. A single non-map input is returned as a copy,
/// and an empty slice yields an empty map. Later inputs win at the leaves;
/// nested maps are merged recursively and lists are replaced.
pub fn merge(values: &[Value]) -> Result<Value> {
    match values {
        [single] if !single.is_map() => Ok(single.clone()),
        _ => {
            let maps = values
                .iter()
                .map(|value| value.expect_map("merge"))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Map(merge_maps(maps)))
        }
    }
}

/// Merges `maps` from left to right into a new map.
pub fn merge_maps<'a>(maps: impl IntoIterator<Item = &'a Map>) -> Map {
    let mut result = Map::new();
    let mut sources = 0usize;
    for map in maps {
        merge_into(&mut result, map);
        sources += 1;
    }
    tracing::debug!(sources, keys = result.len(), "merged maps");
    result
}

/// Merges `source` into `target` in place.
///
/// When both sides hold a map under the same key the two are merged;
/// otherwise `source`'s value replaces `target`'s.
pub fn merge_into(target: &mut Map, source: &Map) {
    for (key, incoming) in source.iter() {
        if let (Some(Value::Map(existing)), Value::Map(incoming)) =
            (target.get_mut(key), incoming)
        {
            merge_into(existing, incoming);
            continue;
        }
        target.set(key.clone(), incoming.clone());
    }
}

/// Merges `source` into `target` like [`merge_into`], but unions lists.
///
/// For a list in `source`, the result is the existing list followed by the
/// incoming items, with every item that deep-equals an earlier one removed.
/// A missing or `Null` existing value counts as an empty list; any other
/// non-list value becomes the first element. Returns `target` for chaining;
/// clone it first if the original must be kept.
pub fn merge_union_arrays<'a>(target: &'a mut Map, source: &Map) -> &'a mut Map {
    for (key, incoming) in source.iter() {
        match incoming {
            Value::List(items) => {
                let existing = match target.get_mut(key).map(std::mem::take) {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::List(existing)) => existing,
                    Some(other) => vec![other],
                };
                target.set(key.clone(), Value::List(union(existing, items)));
            }
            Value::Map(incoming) => {
                if !target.get(key).is_some_and(Value::is_map) {
                    target.set(key.clone(), Value::Map(Map::new()));
                }
                if let Some(Value::Map(existing)) = target.get_mut(key) {
                    merge_union_arrays(existing, incoming);
                }
            }
            scalar => {
                target.set(key.clone(), scalar.clone());
            }
        }
    }
    target
}

fn union(existing: Vec<Value>, incoming: &[Value]) -> Vec<Value> {
    let mut result: Vec<Value> = Vec::with_capacity(existing.len() + incoming.len());
    for item in existing.into_iter().chain(incoming.iter().cloned()) {
        if !result.iter().any(|seen| deep_equal(seen, &item)) {
            result.push(item);
        }
    }
    result
}
