//! Visitor pattern for tree traversal.
//!
//! This module provides the trait and functions the traverser is built on.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for shape-specific visitors
//! - [`walk_sequence`] / [`walk_mapping`] - Traverse all children of a node
//! - [`walk_sequence_filtered`] / [`walk_mapping_filtered`] - Traverse
//!   only the children accepted by a predicate
//!
//! # Examples
//!
//! ## Pruning a Subtree
//!
//! ```rust
//! use jtraverse_core::visitor::{Visitor, walk_mapping_filtered};
//! use jtraverse_core::{Mapping, Node, Primitive, Result, TraversalContext, traverse_with};
//!
//! /// Counts leaves outside of any `"private"` entry.
//! struct PublicLeaves(usize);
//!
//! impl<'a> Visitor<'a> for PublicLeaves {
//!     fn visit_mapping(
//!         &mut self,
//!         entries: &'a Mapping,
//!         ctx: &mut TraversalContext<'a>,
//!     ) -> Result<()> {
//!         walk_mapping_filtered(self, entries, ctx, |child| child.key() != Some("private"))
//!     }
//!
//!     fn visit_primitive(
//!         &mut self,
//!         _value: Primitive<'a>,
//!         _ctx: &mut TraversalContext<'a>,
//!     ) -> Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let tree = Node::from(serde_json::json!({
//!     "name": "demo",
//!     "private": { "token": "secret", "salt": 7 },
//! }));
//! let mut visitor = PublicLeaves(0);
//! traverse_with(&tree, &mut visitor)?;
//! assert_eq!(visitor.0, 1);
//! # Ok::<(), jtraverse_core::TraverseError>(())
//! ```

mod visit;
mod walk;

pub use visit::Visitor;
pub use walk::{
    walk_mapping, walk_mapping_filtered, walk_node, walk_sequence, walk_sequence_filtered,
};
