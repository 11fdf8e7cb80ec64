//! Traversal context threaded through one walk.
//!
//! The context owns the path from the root to the node currently being
//! visited. The walker pushes a segment before descending into a child and
//! pops it afterwards, so callbacks always observe the exact route to the
//! node they are called for.

use std::fmt;

use jtraverse_tree::PathSegment;

use crate::Extensions;

/// Mutable state of a single traversal.
///
/// A fresh context is created for every top-level traversal and dropped
/// when it returns. The first path segment is always [`PathSegment::Root`].
pub struct TraversalContext<'a> {
    path: Vec<PathSegment<'a>>,
    extensions: Extensions,
}

impl<'a> TraversalContext<'a> {
    /// Creates a context positioned at the root.
    pub fn new() -> Self {
        Self {
            path: vec![PathSegment::Root],
            extensions: Extensions::new(),
        }
    }

    /// Returns the route from the root to the current node.
    #[inline]
    pub fn path(&self) -> &[PathSegment<'a>] {
        &self.path
    }

    /// Returns the number of segments below the root marker.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// Returns the segment of the current node.
    #[inline]
    pub fn current(&self) -> PathSegment<'a> {
        self.path.last().copied().unwrap_or(PathSegment::Root)
    }

    /// Returns the textual tokens of the path.
    pub fn path_tokens(&self) -> Vec<String> {
        self.path.iter().map(ToString::to_string).collect()
    }

    /// Returns the path rendered as tokens joined with `/`.
    pub fn path_display(&self) -> PathDisplay<'_, 'a> {
        PathDisplay(&self.path)
    }

    #[inline]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    #[inline]
    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    pub(crate) fn push(&mut self, segment: PathSegment<'a>) {
        self.path.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        // The root marker is never popped.
        if self.path.len() > 1 {
            self.path.pop();
        }
    }
}

impl Default for TraversalContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TraversalContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalContext")
            .field("path", &self.path_tokens())
            .field("extensions", &self.extensions)
            .finish()
    }
}

/// Displays a path as `__root/key/#0`.
pub struct PathDisplay<'p, 'a>(&'p [PathSegment<'a>]);

impl fmt::Display for PathDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
