//! Reading and writing nested values by path.

use super::path::{Path, DEFAULT_SEPARATOR};
use crate::error::{Error, Result};
use crate::value::{Map, Value};

/// Returns the value at a dot-separated `path`, or None if any segment is
/// missing or an intermediate value is not a map.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    get_path(root, &Path::parse(path, DEFAULT_SEPARATOR))
}

/// Like [`get`], but falls back to `default` when the path does not resolve.
pub fn get_or<'a>(root: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(root, path).unwrap_or(default)
}

/// Returns the value at `path`. An empty path addresses `root` itself.
pub fn get_path<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = root;
    for segment in path {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}

/// Returns true if every segment of `path` names a present key.
///
/// A key holding `Null` counts as present.
pub fn has(root: &Value, path: &str) -> bool {
    get(root, path).is_some()
}

/// Sets the value at a dot-separated `path`, creating intermediate maps.
pub fn set(root: &mut Map, path: &str, value: Value) -> Result<()> {
    set_path(root, &Path::parse(path, DEFAULT_SEPARATOR), value)
}

/// Sets the value at `path`, creating a map for every missing parent.
///
/// Fails with [`Error::PathConflict`] if a parent exists but is not a map;
/// the root is left as it was up to the conflicting segment.
pub fn set_path(root: &mut Map, path: &Path, value: Value) -> Result<()> {
    let (key, parents) = path.split_last().ok_or(Error::EmptyPath)?;
    let parent = descend_mut(root, parents)?;
    parent.set(key, value);
    Ok(())
}

/// Removes and returns the value at a dot-separated `path`.
pub fn delete(root: &mut Map, path: &str) -> Option<Value> {
    let path = Path::parse(path, DEFAULT_SEPARATOR);
    let (key, parents) = path.split_last()?;
    let mut current = root;
    for segment in parents {
        current = current.get_mut(segment)?.as_map_mut()?;
    }
    current.delete(key)
}

/// Walks `parents` from `root`, inserting empty maps for missing keys.
pub(crate) fn descend_mut<'a>(root: &'a mut Map, parents: &[String]) -> Result<&'a mut Map> {
    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        let entry = current
            .fields
            .entry(segment.clone())
            .or_insert_with(|| Value::Map(Map::new()));
        current = match entry {
            Value::Map(map) => map,
            other => {
                let location = Path::from_segments(parents[..=depth].to_vec());
                return Err(Error::path_conflict(location.to_string(), other.kind()));
            }
        };
    }
    Ok(current)
}
