//! Conversion between nested maps and single-level maps keyed by full path.
//!
//! Only non-empty maps are descended into. Lists and every scalar are
//! leaves, and an empty map is kept as a `{}` leaf so that it survives the
//! round trip. `unflatten(flatten(m)) == m` holds whenever no key of `m`
//! contains the separator. Flattening never overwrites: two paths that join
//! to the same key are an error.

use super::access::descend_mut;
use super::path::{Path, DEFAULT_SEPARATOR};
use crate::error::{Error, Result};
use crate::value::{Map, Value};
use indexmap::map::Iter;

/// Flattens `map` with the default `.` separator.
pub fn flatten(map: &Map) -> Result<Map> {
    flatten_with_separator(map, DEFAULT_SEPARATOR)
}

/// Flattens `map`, joining parent and child keys with `separator`.
///
/// Fails with [`Error::DuplicateKey`] when two leaves join to the same key,
/// as `{"a": {"b": 1}, "a.b": 2}` does, or any nesting does with an empty
/// separator.
pub fn flatten_with_separator(map: &Map, separator: &str) -> Result<Map> {
    let mut result = Map::new();
    let mut stack: Vec<(Option<String>, Iter<'_, String, Value>)> =
        vec![(None, map.fields.iter())];
    loop {
        let Some((prefix, entries)) = stack.last_mut() else {
            break;
        };
        let next = entries.next().map(|(key, value)| {
            let full_key = match prefix {
                Some(prefix) => format!("{}{}{}", prefix, separator, key),
                None => key.clone(),
            };
            (full_key, value)
        });
        match next {
            None => {
                stack.pop();
            }
            Some((full_key, Value::Map(child))) if !child.is_empty() => {
                stack.push((Some(full_key), child.fields.iter()));
            }
            Some((full_key, leaf)) => {
                if result.has(&full_key) {
                    tracing::trace!(key = %full_key, "flattened key already assigned");
                    return Err(Error::duplicate_key(full_key));
                }
                result.set(full_key, leaf.clone());
            }
        }
    }
    Ok(result)
}

/// Rebuilds a nested map from keys produced by [`flatten`].
pub fn unflatten(flat: &Map) -> Result<Map> {
    unflatten_with_separator(flat, DEFAULT_SEPARATOR)
}

/// Rebuilds a nested map, splitting every key on `separator`.
///
/// Fails with [`Error::PathConflict`] when one key would need to descend
/// through another key's leaf, or two keys address the same location.
pub fn unflatten_with_separator(flat: &Map, separator: &str) -> Result<Map> {
    let mut result = Map::new();
    for (key, value) in flat.iter() {
        let path = Path::parse(key, separator);
        let Some((last, parents)) = path.split_last() else {
            continue;
        };
        let parent = descend_mut(&mut result, parents)?;
        if let Some(existing) = parent.get(last) {
            tracing::trace!(key = %key, "unflatten target already assigned");
            return Err(Error::path_conflict(path.join(separator), existing.kind()));
        }
        parent.set(last, value.clone());
    }
    Ok(result)
}
