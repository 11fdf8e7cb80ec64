//! Integration tests for depth-first traversal over the pirate fixture.
//!
//! These tests exercise the public surface of `jtraverse_core` the way a
//! consumer would: counting nodes, tracking depth, pruning and filtering.

use std::cell::{Cell, RefCell};

use insta::assert_snapshot;
use jtraverse_core::visitor::{Visitor, walk_mapping, walk_sequence};
use jtraverse_core::{
    Mapping, Node, Primitive, Result, TraversalContext, TraverseCallbacks, traverse,
    traverse_with,
};
use jtraverse_integration_tests::{deep_sequence, pirate_tree};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[derive(Debug, Default, PartialEq)]
struct Counts {
    sequences: usize,
    mappings: usize,
    primitives: usize,
}

fn count_with_default_descent(tree: &Node) -> Counts {
    let sequences = Cell::new(0);
    let mappings = Cell::new(0);
    let primitives = Cell::new(0);
    let callbacks = TraverseCallbacks::new()
        .on_sequence(|_, ctx, next| {
            sequences.set(sequences.get() + 1);
            next.proceed(ctx)
        })
        .on_mapping(|_, ctx, next| {
            mappings.set(mappings.get() + 1);
            next.proceed(ctx)
        })
        .on_primitive(|_, _| {
            primitives.set(primitives.get() + 1);
            Ok(())
        });

    traverse(tree, &callbacks).expect("traversal succeeds");

    Counts {
        sequences: sequences.get(),
        mappings: mappings.get(),
        primitives: primitives.get(),
    }
}

/// Records `<kind> <path>` for every visited node.
fn visitation_log(tree: &Node) -> Vec<String> {
    let log = RefCell::new(Vec::new());
    let callbacks = TraverseCallbacks::new()
        .on_sequence(|_, ctx, next| {
            log.borrow_mut().push(format!("sequence {}", ctx.path_display()));
            next.proceed(ctx)
        })
        .on_mapping(|_, ctx, next| {
            log.borrow_mut().push(format!("mapping {}", ctx.path_display()));
            next.proceed(ctx)
        })
        .on_primitive(|value, ctx| {
            log.borrow_mut().push(format!("{} {}", value.type_name(), ctx.path_display()));
            Ok(())
        });

    traverse(tree, &callbacks).expect("traversal succeeds");
    drop(callbacks);
    log.into_inner()
}

#[test]
fn test_root_mapping_callback_fires_first_at_root() {
    let tree = pirate_tree();
    let calls = RefCell::new(Vec::new());
    let callbacks = TraverseCallbacks::new().on_object(|_, ctx, _next| {
        calls.borrow_mut().push(ctx.path_tokens());
        Ok(())
    });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert_eq!(*calls.borrow(), vec![vec!["__root".to_string()]]);
}

#[test]
fn test_encounters_12_leaf_nodes() {
    let tree = pirate_tree();
    let leaves = Cell::new(0);
    let callbacks = TraverseCallbacks::new().on_primitive(|_, _| {
        leaves.set(leaves.get() + 1);
        Ok(())
    });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert_eq!(leaves.get(), 12);
}

#[rstest]
#[case::pirate(pirate_tree(), 2, 6, 12)]
#[case::nested_sequences(deep_sequence(3), 3, 0, 1)]
#[case::primitive_root(Node::from(json!("alone")), 0, 0, 1)]
#[case::empty_mapping(Node::from(json!({})), 0, 1, 0)]
#[case::mixed(Node::from(json!([{ "a": null }, [], true])), 2, 1, 2)]
fn test_counts_every_shape(
    #[case] tree: Node,
    #[case] sequences: usize,
    #[case] mappings: usize,
    #[case] primitives: usize,
) {
    assert_eq!(
        count_with_default_descent(&tree),
        Counts {
            sequences,
            mappings,
            primitives,
        }
    );
}

#[test]
fn test_finds_a_max_depth_of_4() {
    let tree = pirate_tree();
    let max_depth = Cell::new(1usize);

    let enter = |ctx: &mut TraversalContext<'_>| {
        let level = ctx.extensions_mut().get_or_default::<usize>("level");
        *level += 1;
        max_depth.set(max_depth.get().max(*level));
    };
    let leave = |ctx: &mut TraversalContext<'_>| {
        *ctx.extensions_mut().get_or_default::<usize>("level") -= 1;
    };

    let callbacks = TraverseCallbacks::new()
        .on_mapping(|_, ctx, next| {
            enter(ctx);
            next.proceed(ctx)?;
            leave(ctx);
            Ok(())
        })
        .on_sequence(|_, ctx, next| {
            enter(ctx);
            next.proceed(ctx)?;
            leave(ctx);
            Ok(())
        });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert_eq!(max_depth.get(), 4);
}

#[test]
fn test_only_processes_2_mappings_using_a_key_predicate() {
    let tree = pirate_tree();
    let mappings = Cell::new(0);
    let primitives = Cell::new(0);
    let callbacks = TraverseCallbacks::new()
        .on_mapping(|_, ctx, next| {
            mappings.set(mappings.get() + 1);
            next.proceed_filtered(ctx, |child| child.key() == Some("other"))
        })
        .on_primitive(|_, _| {
            primitives.set(primitives.get() + 1);
            Ok(())
        });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert_eq!(mappings.get(), 2);
    assert_eq!(primitives.get(), 0);
}

#[test]
fn test_only_processes_2_sequences_using_an_index_predicate() {
    let tree = pirate_tree();
    let sequences = Cell::new(0);
    let element_paths = RefCell::new(Vec::new());
    let callbacks = TraverseCallbacks::new()
        .on_array(|_, ctx, next| {
            sequences.set(sequences.get() + 1);
            next.proceed_filtered(ctx, |child| child.index() == Some(0))
        })
        .on_primitive(|_, ctx| {
            let path = ctx.path_display().to_string();
            if path.contains('#') {
                element_paths.borrow_mut().push(path);
            }
            Ok(())
        });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert_eq!(sequences.get(), 2);
    assert_eq!(
        *element_paths.borrow(),
        vec![
            "__root/other/arrrgh/#0",
            "__root/other/okThen/#0/nested",
            "__root/other/okThen/#0/yes",
        ]
    );
}

#[test]
fn test_pruned_subtree_fires_no_callbacks() {
    let tree = pirate_tree();
    let sequences = Cell::new(0);
    let primitives = RefCell::new(Vec::new());
    let callbacks = TraverseCallbacks::new()
        .on_mapping(|_, ctx, next| {
            if ctx.current() == "other" {
                return Ok(());
            }
            next.proceed(ctx)
        })
        .on_sequence(|_, ctx, next| {
            sequences.set(sequences.get() + 1);
            next.proceed(ctx)
        })
        .on_primitive(|_, ctx| {
            primitives.borrow_mut().push(ctx.path_display().to_string());
            Ok(())
        });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert_eq!(sequences.get(), 0);
    assert_eq!(
        *primitives.borrow(),
        vec!["__root/hello", "__root/foo/bar/something", "__root/imNull"]
    );
}

#[test]
fn test_path_leads_back_to_the_visited_node() {
    let tree = pirate_tree();
    let mismatches = RefCell::new(Vec::new());
    let callbacks = TraverseCallbacks::new().on_primitive(|value, ctx| {
        let tokens = ctx.path_tokens();
        assert_eq!(tokens[0], "__root");
        let reached = tokens[1..]
            .iter()
            .try_fold(&tree, |node, token| node.child(token));
        if reached.and_then(Node::as_primitive) != Some(value) {
            mismatches.borrow_mut().push(tokens.join("/"));
        }
        Ok(())
    });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert!(mismatches.borrow().is_empty(), "{:?}", mismatches.borrow());
}

#[test]
fn test_visitation_order_is_depth_first() {
    let log = visitation_log(&pirate_tree());

    assert_snapshot!(log.join("\n"), @r"
    mapping __root
    string __root/hello
    mapping __root/foo
    mapping __root/foo/bar
    number __root/foo/bar/something
    mapping __root/other
    sequence __root/other/arrrgh
    string __root/other/arrrgh/#0
    string __root/other/arrrgh/#1
    string __root/other/arrrgh/#2
    string __root/other/arrrgh/#3
    string __root/other/arrrgh/#4
    sequence __root/other/okThen
    mapping __root/other/okThen/#0
    string __root/other/okThen/#0/nested
    boolean __root/other/okThen/#0/yes
    mapping __root/other/okThen/#1
    boolean __root/other/okThen/#1/otherProp
    number __root/other/okThen/#1/dookie
    null __root/imNull
    ");
}

#[test]
fn test_traversal_is_idempotent() {
    let tree = pirate_tree();
    assert_eq!(visitation_log(&tree), visitation_log(&tree));
}

#[test]
fn test_visitor_and_callbacks_agree() {
    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn visit_sequence(
            &mut self,
            items: &'a [Node],
            ctx: &mut TraversalContext<'a>,
        ) -> Result<()> {
            self.log.push(format!("sequence {}", ctx.path_display()));
            walk_sequence(self, items, ctx)
        }

        fn visit_mapping(
            &mut self,
            entries: &'a Mapping,
            ctx: &mut TraversalContext<'a>,
        ) -> Result<()> {
            self.log.push(format!("mapping {}", ctx.path_display()));
            walk_mapping(self, entries, ctx)
        }

        fn visit_primitive(
            &mut self,
            value: Primitive<'a>,
            ctx: &mut TraversalContext<'a>,
        ) -> Result<()> {
            self.log.push(format!("{} {}", value.type_name(), ctx.path_display()));
            Ok(())
        }
    }

    let tree = pirate_tree();
    let mut recorder = Recorder::default();
    traverse_with(&tree, &mut recorder).expect("traversal succeeds");

    assert_eq!(recorder.log, visitation_log(&tree));
}

#[test]
fn test_deeply_nested_sequence() {
    let tree = deep_sequence(200);
    let leaf_depth = Cell::new(None);
    let callbacks = TraverseCallbacks::new().on_primitive(|_, ctx| {
        leaf_depth.set(Some(ctx.depth()));
        Ok(())
    });

    traverse(&tree, &callbacks).expect("traversal succeeds");

    assert_eq!(leaf_depth.get(), Some(200));
    assert_eq!(
        count_with_default_descent(&tree),
        Counts {
            sequences: 200,
            mappings: 0,
            primitives: 1,
        }
    );
}

#[test]
fn test_non_json_leaf_aborts_whole_traversal() {
    let mut tree = pirate_tree();
    if let Node::Mapping(entries) = &mut tree
        && let Some(Node::Mapping(foo)) = entries.get_mut("foo")
    {
        foo.insert("when", Node::opaque("Date"));
    }

    let log = RefCell::new(Vec::new());
    let callbacks = TraverseCallbacks::new().on_primitive(|_, ctx| {
        log.borrow_mut().push(ctx.path_display().to_string());
        Ok(())
    });

    let err = traverse(&tree, &callbacks).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Type of data not supported in JSON: [Date] at __root/foo/when"
    );
    assert_eq!(*log.borrow(), vec!["__root/hello", "__root/foo/bar/something"]);
}
