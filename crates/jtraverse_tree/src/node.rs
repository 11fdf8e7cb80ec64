//! Node definition.
//!
//! The tree value type walked by the traverser.

use serde::Serialize;
use serde::ser::Error as _;

use crate::{Mapping, NodeConversionError, Number, Primitive, Shape};

/// A value in a JSON-shaped tree.
///
/// The first six variants make up the JSON data model. `Record` and
/// `Opaque` stand for runtime values that are not (typed records, binary
/// data, timestamps and similar). They can live in a tree but have no
/// [`Shape`], so the traverser rejects them.
///
/// # Example
///
/// ```rust
/// use jtraverse_tree::Node;
///
/// let node = Node::from(serde_json::json!({ "list": [1, 2, 3] }));
/// assert_eq!(node.type_name(), "mapping");
/// assert!(Node::opaque("Date").shape().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Node>),
    Mapping(Mapping),
    /// Structured value that is not a plain mapping.
    ///
    /// Its fields are never descended into.
    Record {
        /// Runtime type name, e.g. the name of the user type.
        type_name: String,
        fields: Mapping,
    },
    /// Any other runtime value outside the JSON model.
    Opaque {
        /// Runtime type name, e.g. `"bytes"` or `"function"`.
        type_name: String,
    },
}

impl Node {
    /// Creates a record node.
    pub fn record(type_name: impl Into<String>, fields: Mapping) -> Self {
        Self::Record {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Creates an opaque node.
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Opaque {
            type_name: type_name.into(),
        }
    }

    /// Classifies the node, or returns `None` for values outside the JSON model.
    pub fn shape(&self) -> Option<Shape<'_>> {
        match self {
            Node::Sequence(items) => Some(Shape::Sequence(items)),
            Node::Mapping(entries) => Some(Shape::Mapping(entries)),
            Node::Record { .. } | Node::Opaque { .. } => None,
            _ => self.as_primitive().map(Shape::Primitive),
        }
    }

    /// Returns a primitive view of the node if it is a leaf value.
    pub fn as_primitive(&self) -> Option<Primitive<'_>> {
        match self {
            Node::Null => Some(Primitive::Null),
            Node::Bool(value) => Some(Primitive::Bool(*value)),
            Node::Number(value) => Some(Primitive::Number(value)),
            Node::String(value) => Some(Primitive::String(value)),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns true if this node belongs to the JSON model.
    ///
    /// Only the node itself is checked, not its descendants.
    #[inline]
    pub fn is_json(&self) -> bool {
        !matches!(self, Node::Record { .. } | Node::Opaque { .. })
    }

    /// Returns the runtime type name used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
            Node::Record { type_name, .. } | Node::Opaque { type_name } => type_name.as_str(),
            _ => self
                .as_primitive()
                .map(|primitive| primitive.type_name())
                .unwrap_or("unknown"),
        }
    }

    /// Looks up a direct child by key (mappings) or `"#<index>"` token
    /// (sequences).
    pub fn child(&self, token: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.get(token),
            Node::Sequence(items) => token
                .strip_prefix('#')
                .and_then(|digits| digits.parse::<usize>().ok())
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Node {
    /// Non-finite floats become `Null`, as they have no JSON representation.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Node::Null, Node::Number)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Node::Number(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Sequence(value)
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Node::Mapping(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(value) => Node::Bool(value),
            Value::Number(value) => Node::Number(value),
            Value::String(value) => Node::String(value),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(entries) => Node::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Node {
    fn from(value: &serde_json::Value) -> Self {
        Node::from(value.clone())
    }
}

impl TryFrom<&Node> for serde_json::Value {
    type Error = NodeConversionError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        use serde_json::Value;

        Ok(match node {
            Node::Null => Value::Null,
            Node::Bool(value) => Value::Bool(*value),
            Node::Number(value) => Value::Number(value.clone()),
            Node::String(value) => Value::String(value.clone()),
            Node::Sequence(items) => Value::Array(
                items
                    .iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Node::Mapping(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| Ok((key.to_owned(), Value::try_from(value)?)))
                    .collect::<Result<_, NodeConversionError>>()?,
            ),
            Node::Record { type_name, .. } | Node::Opaque { type_name } => {
                return Err(NodeConversionError::not_json(type_name.as_str()));
            }
        })
    }
}

impl TryFrom<Node> for serde_json::Value {
    type Error = NodeConversionError;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        serde_json::Value::try_from(&node)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(value) => serializer.serialize_bool(*value),
            Node::Number(value) => value.serialize(serializer),
            Node::String(value) => serializer.serialize_str(value),
            Node::Sequence(items) => serializer.collect_seq(items),
            Node::Mapping(entries) => serializer.collect_map(entries.iter()),
            Node::Record { type_name, .. } | Node::Opaque { type_name } => Err(S::Error::custom(
                NodeConversionError::not_json(type_name.as_str()),
            )),
        }
    }
}
