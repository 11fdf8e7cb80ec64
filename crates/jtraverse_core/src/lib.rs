//! # jtraverse_core
//!
//! Depth-first traversal engine for JSON-shaped trees.
//!
//! This crate provides:
//! - [`traverse`], driven by a [`TraverseCallbacks`] configuration
//! - [`traverse_with`], driven by a [`Visitor`] implementation
//! - The [`TraversalContext`] carrying the path to the current node
//!
//! Every node is visited at most once, depth-first and left to right.
//! Sequence and mapping callbacks receive a [`Continuation`]: descending
//! into the node's children happens only if the callback calls it, and
//! `proceed_filtered` descends into a subset of them.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//!
//! use jtraverse_core::{Node, TraverseCallbacks, traverse};
//!
//! let tree = Node::from(serde_json::json!({
//!     "hello": "world",
//!     "other": { "skip": [1, 2], "keep": true },
//! }));
//! let leaves = RefCell::new(Vec::new());
//!
//! let callbacks = TraverseCallbacks::new()
//!     .on_mapping(|_entries, ctx, next| {
//!         next.proceed_filtered(ctx, |child| child.key() != Some("skip"))
//!     })
//!     .on_primitive(|_value, ctx| {
//!         leaves.borrow_mut().push(ctx.path_display().to_string());
//!         Ok(())
//!     });
//!
//! traverse(&tree, &callbacks)?;
//! assert_eq!(*leaves.borrow(), vec!["__root/hello", "__root/other/keep"]);
//! # Ok::<(), jtraverse_core::TraverseError>(())
//! ```

mod callbacks;
mod child;
mod context;
mod error;
mod extensions;
mod traverse;
pub mod visitor;

pub use callbacks::{Continuation, TraverseCallbacks};
pub use child::ChildRef;
pub use context::{PathDisplay, TraversalContext};
pub use error::{Result, TraverseError};
pub use extensions::Extensions;
pub use traverse::{traverse, traverse_default, traverse_with};

// Re-export commonly used visitor items for convenience
pub use visitor::{Visitor, walk_mapping, walk_node, walk_sequence};

pub use jtraverse_tree::{Mapping, Node, Number, PathSegment, Primitive, Shape};
