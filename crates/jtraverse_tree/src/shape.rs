//! Shape classification for nodes.

use crate::{Mapping, Node, Number};

/// One of the three node shapes of the JSON data model.
///
/// Returned by [`Node::shape`]. Values outside the JSON model have no shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// A leaf value.
    Primitive(Primitive<'a>),
    /// An ordered list of children.
    Sequence(&'a [Node]),
    /// An insertion-ordered keyed collection of children.
    Mapping(&'a Mapping),
}

impl Shape<'_> {
    /// Returns the number of direct children (zero for primitives).
    pub fn child_count(&self) -> usize {
        match self {
            Shape::Primitive(_) => 0,
            Shape::Sequence(items) => items.len(),
            Shape::Mapping(entries) => entries.len(),
        }
    }

    /// Returns the shape name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Primitive(primitive) => primitive.type_name(),
            Shape::Sequence(_) => "sequence",
            Shape::Mapping(_) => "mapping",
        }
    }
}

/// A borrowed view of a primitive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Null,
    Bool(bool),
    Number(&'a Number),
    String(&'a str),
}

impl<'a> Primitive<'a> {
    /// Returns true if this is `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Primitive::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<&'a Number> {
        match self {
            Primitive::Number(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Primitive::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the runtime type name of the value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Bool(_) => "boolean",
            Primitive::Number(_) => "number",
            Primitive::String(_) => "string",
        }
    }

    /// Copies the value into an owned node.
    pub fn to_node(&self) -> Node {
        match self {
            Primitive::Null => Node::Null,
            Primitive::Bool(value) => Node::Bool(*value),
            Primitive::Number(value) => Node::Number((*value).clone()),
            Primitive::String(value) => Node::String((*value).to_owned()),
        }
    }
}
