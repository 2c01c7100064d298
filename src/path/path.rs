//! Path type.

use std::fmt;

/// Separator used when a path is given as a plain string.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Path is an ordered list of map keys locating a nested value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates a new empty path, which addresses the root.
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Splits `path` on `separator`.
    ///
    /// Splitting never drops segments: `""` is a single empty key and
    /// `"a..b"` has an empty middle key.
    pub fn parse(path: &str, separator: &str) -> Self {
        if separator.is_empty() {
            return Path::from_segments(vec![path.to_string()]);
        }
        path.split(separator).map(str::to_string).collect()
    }

    /// Creates a path from a vector of segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Path { segments }
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Returns the last segment.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Creates a new path with the given segment appended.
    pub fn with(&self, segment: impl Into<String>) -> Self {
        let mut new_path = self.clone();
        new_path.push(segment);
        new_path
    }

    /// Returns the first `len` segments as a new path.
    pub fn prefix(&self, len: usize) -> Self {
        Path {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
        }
    }

    /// Splits off the last segment, returning the parent segments and the key.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_last()
            .map(|(last, parents)| (last.as_str(), parents))
    }

    /// Returns a slice of the segments.
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    /// Joins the segments with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::parse(path, DEFAULT_SEPARATOR)
    }
}

impl FromIterator<String> for Path {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(DEFAULT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_separator() {
        let path = Path::from("metadata.labels.app");
        assert_eq!(path.len(), 3);
        assert_eq!(path.last(), Some("app"));
        assert_eq!(path.to_string(), "metadata.labels.app");
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        assert_eq!(Path::from("").as_slice(), &["".to_string()]);
        assert_eq!(Path::from("a..b").len(), 3);
    }

    #[test]
    fn test_parse_custom_separator() {
        let path = Path::parse("a/b.c/d", "/");
        assert_eq!(path.as_slice(), &["a", "b.c", "d"]);
        assert_eq!(path.join("_"), "a_b.c_d");
    }

    #[test]
    fn test_path_operations() {
        let mut path = Path::new();
        assert!(path.is_empty());

        path.push("metadata");
        path.push("name");
        assert_eq!(path.len(), 2);
        assert_eq!(path.prefix(1).to_string(), "metadata");

        let (last, parents) = path.split_last().unwrap();
        assert_eq!(last, "name");
        assert_eq!(parents, &["metadata".to_string()]);

        assert_eq!(path.pop(), Some("name".to_string()));
        assert_eq!(path.with("uid").to_string(), "metadata.uid");
    }

    #[test]
    fn test_path_ordering() {
        assert!(Path::from("a.b") < Path::from("a.c"));
        assert!(Path::from("a") < Path::from("a.b"));
    }
}
