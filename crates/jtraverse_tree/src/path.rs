//! Path segments naming the route from the root to a node.

use std::fmt;

/// Token of the synthetic segment that starts every path.
pub const ROOT_TOKEN: &str = "__root";

/// One step in the route from the root to a node.
///
/// The textual token of a segment is `"__root"` for the root marker,
/// `"#<index>"` for a sequence element and the literal key for a mapping
/// entry. Two segments of different kinds can share a token (a mapping key
/// `"#0"` renders like the first sequence element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment<'a> {
    /// Synthetic marker one level above the value handed to the traverser.
    Root,
    /// Zero-based sequence position.
    Index(usize),
    /// Mapping key.
    Key(&'a str),
}

impl<'a> PathSegment<'a> {
    #[inline]
    pub const fn is_root(&self) -> bool {
        matches!(self, PathSegment::Root)
    }

    #[inline]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(index) => Some(*index),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_key(&self) -> Option<&'a str> {
        match self {
            PathSegment::Key(key) => Some(*key),
            _ => None,
        }
    }

    /// Returns true if the textual token of this segment equals `token`.
    pub fn matches_token(&self, token: &str) -> bool {
        match self {
            PathSegment::Root => token == ROOT_TOKEN,
            PathSegment::Key(key) => *key == token,
            PathSegment::Index(index) => token
                .strip_prefix('#')
                .is_some_and(|digits| digits == index.to_string()),
        }
    }
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Root => f.write_str(ROOT_TOKEN),
            PathSegment::Index(index) => write!(f, "#{}", index),
            PathSegment::Key(key) => f.write_str(key),
        }
    }
}

impl PartialEq<str> for PathSegment<'_> {
    fn eq(&self, other: &str) -> bool {
        self.matches_token(other)
    }
}

impl PartialEq<&str> for PathSegment<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.matches_token(other)
    }
}
