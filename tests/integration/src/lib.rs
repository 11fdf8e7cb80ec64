//! Shared fixtures for jtraverse integration tests.

use jtraverse_core::Node;
use serde_json::json;

/// The pirate fixture: 12 primitives, 6 mappings, 2 sequences.
pub fn pirate_tree() -> Node {
    Node::from(json!({
        "hello": "world",
        "foo": {
            "bar": {
                "something": 42,
            },
        },
        "other": {
            "arrrgh": ["matety", "I", "am", "a", "pirate"],
            "okThen": [
                {
                    "nested": "obj",
                    "yes": true,
                },
                {
                    "otherProp": false,
                    "dookie": 177,
                },
            ],
        },
        "imNull": null,
    }))
}

/// Builds a sequence nested `depth` levels deep around a single leaf.
pub fn deep_sequence(depth: usize) -> Node {
    (0..depth).fold(Node::from("leaf"), |inner, _| Node::Sequence(vec![inner]))
}
