//! # jtraverse_tree
//!
//! Tree types for jtraverse.
//!
//! This crate provides the in-memory tree walked by `jtraverse_core`. A tree
//! follows the JSON data model: every [`Node`] is a primitive, a sequence of
//! nodes, or an insertion-ordered mapping from text keys to nodes.
//!
//! ## Architecture
//!
//! - [`Node`] owns its children; there is no sharing and no cycles
//! - [`Node::shape`] classifies a node into one of the three [`Shape`]s
//! - Values outside the JSON model (`Node::Record`, `Node::Opaque`) can be
//!   represented, but have no shape and are rejected by the traverser
//! - [`PathSegment`] names one step from a parent to a child
//!
//! ## Example
//!
//! ```rust
//! use jtraverse_tree::{Mapping, Node, Primitive, Shape};
//!
//! let mut mapping = Mapping::new();
//! mapping.insert("hello", Node::from("world"));
//! let node = Node::Mapping(mapping);
//!
//! let Some(Shape::Mapping(entries)) = node.shape() else {
//!     panic!("expected a mapping");
//! };
//! let value = entries.get("hello").and_then(Node::as_primitive);
//! assert_eq!(value, Some(Primitive::String("world")));
//! ```

mod error;
mod mapping;
mod node;
mod path;
mod shape;

pub use error::NodeConversionError;
pub use mapping::{IntoIter, Iter, Mapping};
pub use node::Node;
pub use path::{PathSegment, ROOT_TOKEN};
pub use shape::{Primitive, Shape};

/// JSON number type (integer or finite float).
pub use serde_json::Number;
