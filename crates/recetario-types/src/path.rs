//! Path addressing for the remote store.

use serde::{Deserialize, Serialize};

/// A slash-joined path into the store's hierarchical address space.
///
/// Paths are sequences of non-empty segments. Segments are used as
/// given, with no escaping, so a segment must not contain `/`.
/// What else a segment may contain is the backend's concern.
///
/// # Example
///
/// ```
/// use recetario_types::StorePath;
///
/// let path = StorePath::root("customRecipes").child("u1").child("-Nab0");
/// assert_eq!(path.to_string(), "customRecipes/u1/-Nab0");
/// assert_eq!(path.depth(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorePath {
    segments: Vec<String>,
}

impl StorePath {
    /// Creates a single-segment path.
    #[must_use]
    pub fn root(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns the path's segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if `self` addresses `other` or an ancestor of it.
    ///
    /// # Example
    ///
    /// ```
    /// use recetario_types::StorePath;
    ///
    /// let ns = StorePath::root("customRecipes").child("u1");
    /// let record = ns.child("-Nab0");
    /// assert!(ns.contains(&record));
    /// assert!(ns.contains(&ns));
    /// assert!(!record.contains(&ns));
    /// ```
    #[must_use]
    pub fn contains(&self, other: &StorePath) -> bool {
        other.segments.len() >= self.segments.len()
            && self.segments == other.segments[..self.segments.len()]
    }

    /// Returns `true` if one path addresses a subtree of the other.
    ///
    /// A mutation at path `p` is visible to a watcher of path `w`
    /// exactly when `p.overlaps(w)`: either the mutation happened inside
    /// the watched subtree, or it replaced an ancestor of it.
    #[must_use]
    pub fn overlaps(&self, other: &StorePath) -> bool {
        self.contains(other) || other.contains(self)
    }
}

impl std::fmt::Display for StorePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_appends() {
        let path = StorePath::root("a").child("b").child("c");
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.to_string(), "a/b/c");
    }

    #[test]
    fn child_does_not_mutate_parent() {
        let parent = StorePath::root("a");
        let _child = parent.child("b");
        assert_eq!(parent.depth(), 1);
    }

    #[test]
    fn contains_prefixes_only() {
        let ns = StorePath::root("customRecipes").child("u1");
        let record = ns.child("r1");
        let sibling = StorePath::root("customRecipes").child("u2");

        assert!(ns.contains(&record));
        assert!(!ns.contains(&sibling));
        assert!(!record.contains(&ns));
    }

    #[test]
    fn contains_is_segment_wise() {
        // "u1" is not a prefix of "u10" at the segment level.
        let a = StorePath::root("customRecipes").child("u1");
        let b = StorePath::root("customRecipes").child("u10");
        assert!(!a.contains(&b));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlaps_both_directions() {
        let root = StorePath::root("customRecipes");
        let record = root.child("u1").child("r1");

        assert!(root.overlaps(&record));
        assert!(record.overlaps(&root));
    }
}
