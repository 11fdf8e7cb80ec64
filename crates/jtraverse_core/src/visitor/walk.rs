//! Walk functions for tree traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern.
//! They are used by the default implementations in `Visitor` trait.

use jtraverse_tree::{Mapping, Node, PathSegment, Shape};
use tracing::{trace, warn};

use super::visit::Visitor;
use crate::{ChildRef, Result, TraversalContext, TraverseError};

/// Walks a node by dispatching to the shape-specific visitor method.
///
/// # Errors
///
/// Returns [`TraverseError::UnsupportedType`] if the node is outside the
/// JSON model, or any error returned by the visitor.
pub fn walk_node<'a, V>(
    visitor: &mut V,
    node: &'a Node,
    ctx: &mut TraversalContext<'a>,
) -> Result<()>
where
    V: Visitor<'a>,
{
    let Some(shape) = node.shape() else {
        warn!(
            type_name = node.type_name(),
            path = %ctx.path_display(),
            "Unsupported node type"
        );
        return Err(TraverseError::unsupported(
            node.type_name(),
            ctx.path_display().to_string(),
        ));
    };

    trace!(shape = shape.name(), path = %ctx.path_display(), "Visiting node");

    match shape {
        Shape::Sequence(items) => visitor.visit_sequence(items, ctx),
        Shape::Mapping(entries) => visitor.visit_mapping(entries, ctx),
        Shape::Primitive(value) => visitor.visit_primitive(value, ctx),
    }
}

/// Walks all elements of a sequence in index order.
#[inline]
pub fn walk_sequence<'a, V>(
    visitor: &mut V,
    items: &'a [Node],
    ctx: &mut TraversalContext<'a>,
) -> Result<()>
where
    V: Visitor<'a>,
{
    walk_sequence_filtered(visitor, items, ctx, |_| true)
}

/// Walks the elements of a sequence accepted by `keep`.
///
/// Rejected elements are skipped together with their whole subtree.
pub fn walk_sequence_filtered<'a, V, F>(
    visitor: &mut V,
    items: &'a [Node],
    ctx: &mut TraversalContext<'a>,
    mut keep: F,
) -> Result<()>
where
    V: Visitor<'a>,
    F: FnMut(ChildRef<'a>) -> bool,
{
    for (index, node) in items.iter().enumerate() {
        if !keep(ChildRef::Element { index, node }) {
            trace!(index, path = %ctx.path_display(), "Skipping filtered element");
            continue;
        }
        walk_child(visitor, PathSegment::Index(index), node, ctx)?;
    }
    Ok(())
}

/// Walks all entries of a mapping in insertion order.
#[inline]
pub fn walk_mapping<'a, V>(
    visitor: &mut V,
    entries: &'a Mapping,
    ctx: &mut TraversalContext<'a>,
) -> Result<()>
where
    V: Visitor<'a>,
{
    walk_mapping_filtered(visitor, entries, ctx, |_| true)
}

/// Walks the entries of a mapping accepted by `keep`.
///
/// Rejected entries are skipped together with their whole subtree.
pub fn walk_mapping_filtered<'a, V, F>(
    visitor: &mut V,
    entries: &'a Mapping,
    ctx: &mut TraversalContext<'a>,
    mut keep: F,
) -> Result<()>
where
    V: Visitor<'a>,
    F: FnMut(ChildRef<'a>) -> bool,
{
    for (key, node) in entries {
        if !keep(ChildRef::Entry { key, node }) {
            trace!(key, path = %ctx.path_display(), "Skipping filtered entry");
            continue;
        }
        walk_child(visitor, PathSegment::Key(key), node, ctx)?;
    }
    Ok(())
}

/// Descends into one child with `segment` pushed for the duration of the walk.
fn walk_child<'a, V>(
    visitor: &mut V,
    segment: PathSegment<'a>,
    node: &'a Node,
    ctx: &mut TraversalContext<'a>,
) -> Result<()>
where
    V: Visitor<'a>,
{
    ctx.push(segment);
    let result = walk_node(visitor, node, ctx);
    // Pop on the error path too, so the path stays balanced.
    ctx.pop();
    result
}
