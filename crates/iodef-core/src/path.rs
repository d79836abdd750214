//! # Tree Paths
//!
//! Locations inside a document tree, rendered as JSON Pointers
//! (RFC 6901): `/Incident/0/Contact/1/role`. Used by codec errors and
//! validator reports alike so both point at the same spot.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

/// A path from the document root to a node or property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePath {
    segments: Vec<Segment>,
}

impl TreePath {
    /// The empty path (the document root).
    pub fn root() -> Self {
        Self::default()
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Append a property name in place.
    pub fn push_key(&mut self, key: &'static str) {
        self.segments.push(Segment::Key(key));
    }

    /// Append a sequence index in place.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    /// Remove the last segment.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// A copy of this path extended by one property name.
    pub fn key(&self, key: &'static str) -> Self {
        let mut next = self.clone();
        next.push_key(key);
        next
    }

    /// A copy of this path extended by one sequence index.
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.push_index(index);
        next
    }

    /// The last property name on the path, if any.
    pub fn last_key(&self) -> Option<&'static str> {
        self.segments.iter().rev().find_map(|s| match s {
            Segment::Key(k) => Some(*k),
            Segment::Index(_) => None,
        })
    }

    /// JSON Pointer form; the root is the empty string.
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Key(k) => out.push_str(&k.replace('~', "~0").replace('/', "~1")),
                Segment::Index(i) => out.push_str(&i.to_string()),
            }
        }
        out
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.to_pointer())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        let p = TreePath::root();
        assert_eq!(p.to_pointer(), "");
        assert_eq!(p.to_string(), "(root)");
    }

    #[test]
    fn test_pointer_rendering() {
        let p = TreePath::root().key("Incident").index(0).key("Contact").index(1);
        assert_eq!(p.to_pointer(), "/Incident/0/Contact/1");
        assert_eq!(p.depth(), 4);
        assert_eq!(p.last_key(), Some("Contact"));
    }

    #[test]
    fn test_push_pop_in_place() {
        let mut p = TreePath::root();
        p.push_key("Incident");
        p.push_index(2);
        assert_eq!(p.to_string(), "/Incident/2");
        p.pop();
        p.pop();
        assert!(p.is_root());
    }

    #[test]
    fn test_escapes_pointer_metacharacters() {
        let p = TreePath::root().key("a/b~c");
        assert_eq!(p.to_pointer(), "/a~1b~0c");
    }
}
