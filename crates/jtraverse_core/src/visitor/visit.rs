//! Visitor trait for traversing JSON-shaped trees.
//!
//! Each `visit_*` method has a default implementation that keeps walking,
//! so a visitor only overrides the shapes it cares about. Calling one of
//! the `walk_*` functions from an override is what descends into the
//! children; returning without calling one prunes the subtree.
//!
//! # Example
//!
//! ```rust
//! use jtraverse_core::visitor::Visitor;
//! use jtraverse_core::{Node, Primitive, Result, TraversalContext, traverse_with};
//!
//! /// Collects every string leaf together with its path.
//! #[derive(Default)]
//! struct StringCollector {
//!     found: Vec<(String, String)>,
//! }
//!
//! impl<'a> Visitor<'a> for StringCollector {
//!     fn visit_primitive(
//!         &mut self,
//!         value: Primitive<'a>,
//!         ctx: &mut TraversalContext<'a>,
//!     ) -> Result<()> {
//!         if let Some(text) = value.as_str() {
//!             self.found.push((ctx.path_display().to_string(), text.to_owned()));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let tree = Node::from(serde_json::json!({ "greeting": "hi", "n": 1 }));
//! let mut collector = StringCollector::default();
//! traverse_with(&tree, &mut collector)?;
//! assert_eq!(collector.found, vec![("__root/greeting".to_string(), "hi".to_string())]);
//! # Ok::<(), jtraverse_core::TraverseError>(())
//! ```

use jtraverse_tree::{Mapping, Node, Primitive};

use super::walk::{walk_mapping, walk_sequence};
use crate::{Result, TraversalContext};

/// Visitor trait for read-only traversal.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes and path segments to the tree.
///
/// # Control Flow
///
/// Returning `Err` aborts the whole traversal; the error reaches the
/// caller of [`traverse_with`](crate::traverse_with) unchanged.
pub trait Visitor<'a>: Sized {
    /// Visit a sequence node.
    fn visit_sequence(&mut self, items: &'a [Node], ctx: &mut TraversalContext<'a>) -> Result<()> {
        walk_sequence(self, items, ctx)
    }

    /// Visit a mapping node.
    fn visit_mapping(
        &mut self,
        entries: &'a Mapping,
        ctx: &mut TraversalContext<'a>,
    ) -> Result<()> {
        walk_mapping(self, entries, ctx)
    }

    /// Visit a primitive leaf.
    fn visit_primitive(
        &mut self,
        _value: Primitive<'a>,
        _ctx: &mut TraversalContext<'a>,
    ) -> Result<()> {
        Ok(()) // Leaf, nothing to walk
    }
}
