//! Segment paths into the tree.

use std::fmt;

/// A path from the root of a [`TreeStore`](crate::TreeStore).
///
/// Segments are plain names. Unlike filesystem paths they may contain
/// spaces and punctuation (`R&D Intern at Sandia National Labs` is one
/// segment), so the only reserved character is the `/` separator used by
/// [`Path::parse`] and [`Display`](fmt::Display).
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a `/`-separated path string.
    ///
    /// Empty components are ignored, so leading, trailing and doubled
    /// slashes all normalize away.
    ///
    /// ```rust
    /// use folio_tree::Path;
    ///
    /// let path = Path::parse("projects/SWE Casino");
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(Path::parse("/projects/"), Path::parse("projects"));
    /// ```
    pub fn parse(s: &str) -> Self {
        Path {
            components: s
                .split('/')
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
                .collect(),
        }
    }

    /// Check if this path is empty (root path).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// Append one segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.components.push(segment.into());
    }

    /// Remove and return the last segment. Popping the root returns `None`.
    pub fn pop(&mut self) -> Option<String> {
        self.components.pop()
    }

    /// Render the components joined with an arbitrary separator.
    pub fn join_with(&self, separator: &str) -> String {
        self.components.join(separator)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

/// Macro for building paths from a literal.
///
/// # Example
///
/// ```rust
/// use folio_tree::path;
///
/// let p = path!("resume/NMT SGA Web Master");
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(Path::parse("").len(), 0);
        assert_eq!(Path::parse("foo").len(), 1);
        assert_eq!(Path::parse("foo/bar").len(), 2);
        assert_eq!(Path::parse("foo/bar/baz").len(), 3);
    }

    #[test]
    fn normalize_slashes() {
        assert_eq!(Path::parse("foo/bar/"), Path::parse("foo/bar"));
        assert_eq!(Path::parse("foo//bar"), Path::parse("foo/bar"));
        assert_eq!(Path::parse("/foo/bar"), Path::parse("foo/bar"));
    }

    #[test]
    fn segments_keep_spaces_and_punctuation() {
        let p = path!("resume/R&D Intern at Sandia National Labs");
        assert_eq!(p.len(), 2);
        assert_eq!(p.components[1], "R&D Intern at Sandia National Labs");
    }

    #[test]
    fn push_and_pop() {
        let mut p = Path::root();
        p.push("projects");
        p.push("Inn");
        assert_eq!(p.to_string(), "projects/Inn");

        assert_eq!(p.pop().as_deref(), Some("Inn"));
        assert_eq!(p.pop().as_deref(), Some("projects"));
        assert_eq!(p.pop(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn join_with_separator() {
        assert_eq!(path!("a/b/c").join_with("\\"), "a\\b\\c");
        assert_eq!(Path::root().join_with("\\"), "");
    }
}
