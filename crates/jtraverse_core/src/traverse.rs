//! Traversal entry points.

use jtraverse_tree::Node;
use tracing::debug;

use crate::callbacks::CallbackVisitor;
use crate::visitor::{Visitor, walk_node};
use crate::{Result, TraversalContext, TraverseCallbacks, TraverseError};

/// Walks `root` depth-first, invoking the matching callback at every node.
///
/// `root` may be a `&Node` or an `Option<&Node>`.
///
/// # Errors
///
/// - [`TraverseError::MissingInput`] if `root` is `None`; no callback runs.
/// - [`TraverseError::UnsupportedType`] when a node outside the JSON model
///   is reached, at any depth.
/// - Any error returned by a callback, unchanged.
pub fn traverse<'a>(
    root: impl Into<Option<&'a Node>>,
    callbacks: &TraverseCallbacks<'a>,
) -> Result<()> {
    let mut visitor = CallbackVisitor::new(callbacks);
    traverse_with(root, &mut visitor)
}

/// Walks `root` without callbacks.
///
/// Useful to check that a whole tree stays inside the JSON model.
pub fn traverse_default<'a>(root: impl Into<Option<&'a Node>>) -> Result<()> {
    traverse(root, &TraverseCallbacks::default())
}

/// Walks `root` depth-first with a [`Visitor`], starting from a fresh context.
///
/// # Errors
///
/// Same as [`traverse`].
pub fn traverse_with<'a, V>(root: impl Into<Option<&'a Node>>, visitor: &mut V) -> Result<()>
where
    V: Visitor<'a>,
{
    let root = root.into().ok_or(TraverseError::MissingInput)?;

    debug!(root = root.type_name(), "Starting traversal");

    let mut ctx = TraversalContext::new();
    let result = walk_node(visitor, root, &mut ctx);

    match &result {
        Ok(()) => debug!("Traversal finished"),
        Err(e) => debug!("Traversal aborted: {}", e),
    }
    result
}
