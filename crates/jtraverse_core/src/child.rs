//! Child references handed to descent filters.

use jtraverse_tree::{Node, PathSegment};

/// A direct child of a sequence or mapping, as seen by a descent filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildRef<'a> {
    /// Sequence element at `index`.
    Element { index: usize, node: &'a Node },
    /// Mapping entry under `key`.
    Entry { key: &'a str, node: &'a Node },
}

impl<'a> ChildRef<'a> {
    #[inline]
    pub fn node(&self) -> &'a Node {
        match self {
            ChildRef::Element { node, .. } | ChildRef::Entry { node, .. } => *node,
        }
    }

    /// Returns the sequence position, or `None` for mapping entries.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            ChildRef::Element { index, .. } => Some(*index),
            ChildRef::Entry { .. } => None,
        }
    }

    /// Returns the mapping key, or `None` for sequence elements.
    #[inline]
    pub fn key(&self) -> Option<&'a str> {
        match self {
            ChildRef::Element { .. } => None,
            ChildRef::Entry { key, .. } => Some(*key),
        }
    }

    /// Returns the path segment pushed when descending into this child.
    pub fn segment(&self) -> PathSegment<'a> {
        match self {
            ChildRef::Element { index, .. } => PathSegment::Index(*index),
            ChildRef::Entry { key, .. } => PathSegment::Key(*key),
        }
    }
}
