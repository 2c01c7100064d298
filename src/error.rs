//! Error types shared by every toolkit operation.

use thiserror::Error;

/// Error is returned when an operation receives input of the wrong shape.
///
/// Absence of a key or path is never an error; lookups report it through
/// `Option` or `bool` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{operation}: type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        operation: String,
        expected: String,
        actual: String,
    },

    #[error("cannot invert: value {value} is shared by keys '{first}' and '{second}'")]
    DuplicateValue {
        value: String,
        first: String,
        second: String,
    },

    #[error("missing required key: {key}")]
    MissingKey { key: String },

    #[error("{path}: cannot assign through {actual}")]
    PathConflict { path: String, actual: String },

    #[error("flattened key '{key}' is produced by more than one path")]
    DuplicateKey { key: String },

    #[error("path has no segments")]
    EmptyPath,

    #[error("cycle detected at node {node}")]
    Cycle { node: usize },

    #[error("unknown node {node}")]
    UnknownNode { node: usize },

    #[error("node {node} is not a {expected}")]
    NotAContainer { node: usize, expected: String },
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(
        operation: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Error::TypeMismatch {
            operation: operation.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a duplicate value error.
    pub fn duplicate_value(
        value: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Error::DuplicateValue {
            value: value.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Error::MissingKey { key: key.into() }
    }

    /// Creates a path conflict error.
    pub fn path_conflict(path: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::PathConflict {
            path: path.into(),
            actual: actual.into(),
        }
    }

    /// Creates a duplicate flattened key error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Error::DuplicateKey { key: key.into() }
    }

    /// Creates a not-a-container error.
    pub fn not_a_container(node: usize, expected: impl Into<String>) -> Self {
        Error::NotAContainer {
            node,
            expected: expected.into(),
        }
    }

    /// Returns true for errors caused by a wrongly shaped argument.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. } | Error::PathConflict { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch("merge", "map", "list");
        assert_eq!(err.to_string(), "merge: type mismatch: expected map, got list");

        let err = Error::duplicate_value("x", "a", "b");
        assert!(err.to_string().contains("'a' and 'b'"));

        let err = Error::path_conflict("a.b", "int");
        assert_eq!(err.to_string(), "a.b: cannot assign through int");

        let err = Error::duplicate_key("abc");
        assert_eq!(err.to_string(), "flattened key 'abc' is produced by more than one path");
    }

    #[test]
    fn test_error_classes() {
        assert!(Error::type_mismatch("invert", "scalar", "map").is_type_error());
        assert!(Error::path_conflict("a", "string").is_type_error());
        assert!(!Error::duplicate_value("x", "a", "b").is_type_error());
        assert!(!Error::missing_key("a").is_type_error());
        assert!(!Error::duplicate_key("a.b").is_type_error());
    }
}
