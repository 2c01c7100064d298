//! Per-leaf comparison results.

use super::equality::deep_equal;
use crate::path::Path;
use crate::value::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Comparison holds the paths that differ between two values.
///
/// No path will appear in more than one of the three sets. If all of the
/// sets are empty, then the values were equal. Only maps are descended
/// into; lists and scalars are compared whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Paths present in the left-hand side but not the right-hand side.
    pub removed: BTreeSet<Path>,
    /// Paths present in both but holding different values.
    pub modified: BTreeSet<Path>,
    /// Paths present in the right-hand side but not the left-hand side.
    pub added: BTreeSet<Path>,
}

impl Comparison {
    /// Creates a new empty Comparison.
    pub fn new() -> Self {
        Comparison::default()
    }

    /// Returns true if there are no changes.
    pub fn is_same(&self) -> bool {
        self.removed.is_empty() && self.modified.is_empty() && self.added.is_empty()
    }

    /// Returns true if any paths were removed.
    pub fn has_removed(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Returns true if any paths were modified.
    pub fn has_modified(&self) -> bool {
        !self.modified.is_empty()
    }

    /// Returns true if any paths were added.
    pub fn has_added(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Compares `lhs` with `rhs` leaf by leaf.
///
/// A value that changes kind (say, a map replaced by a string) is reported
/// as modified at its own path. Comparing two differing scalars yields the
/// empty path in `modified`.
pub fn compare(lhs: &Value, rhs: &Value) -> Comparison {
    let mut result = Comparison::new();
    let mut pending = vec![(Path::new(), lhs, rhs)];
    while let Some((path, lhs, rhs)) = pending.pop() {
        match (lhs, rhs) {
            (Value::Map(left), Value::Map(right)) => {
                for (key, l) in left.iter() {
                    match right.get(key) {
                        Some(r) => pending.push((path.with(key.clone()), l, r)),
                        None => {
                            result.removed.insert(path.with(key.clone()));
                        }
                    }
                }
                for key in right.keys().filter(|key| !left.has(key)) {
                    result.added.insert(path.with(key.clone()));
                }
            }
            _ => {
                if !deep_equal(lhs, rhs) {
                    result.modified.insert(path);
                }
            }
        }
    }
    result
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, paths: &BTreeSet<Path>) -> fmt::Result {
    write!(f, "- {}:", title)?;
    for path in paths {
        write!(f, "\n  {}", path)?;
    }
    Ok(())
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            ("Modified Fields", &self.modified),
            ("Added Fields", &self.added),
            ("Removed Fields", &self.removed),
        ];
        let mut first = true;
        for (title, paths) in sections {
            if paths.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            write_section(f, title, paths)?;
        }
        Ok(())
    }
}
