//! Closure-based traversal callbacks.
//!
//! [`TraverseCallbacks`] holds up to three optional callbacks, one per node
//! shape. Sequence and mapping callbacks receive a [`Continuation`] and
//! control descent by calling it (or not). Unset slots descend
//! unconditionally for composites and do nothing for primitives.

use std::fmt;

use jtraverse_tree::{Mapping, Node, Primitive};
use tracing::debug;

use crate::visitor::{
    Visitor, walk_mapping, walk_mapping_filtered, walk_sequence, walk_sequence_filtered,
};
use crate::{ChildRef, Result, TraversalContext};

type SequenceCallback<'a> = dyn for<'c> Fn(
        &'a [Node],
        &mut TraversalContext<'a>,
        Continuation<'c, 'a>,
    ) -> Result<()>
    + 'a;
type MappingCallback<'a> = dyn for<'c> Fn(
        &'a Mapping,
        &mut TraversalContext<'a>,
        Continuation<'c, 'a>,
    ) -> Result<()>
    + 'a;
type PrimitiveCallback<'a> = dyn Fn(Primitive<'a>, &mut TraversalContext<'a>) -> Result<()> + 'a;

/// Callback configuration for [`traverse`](crate::traverse).
///
/// Every slot is optional; `TraverseCallbacks::default()` walks the whole
/// tree without observing it.
///
/// Callbacks are `Fn` because a continuation re-enters the same set of
/// callbacks for the descendants. Keep mutable state in a `Cell`/`RefCell`
/// or in the context's [`Extensions`](crate::Extensions).
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
///
/// use jtraverse_core::{Node, TraverseCallbacks, traverse};
///
/// let tree = Node::from(serde_json::json!({ "a": [1, 2], "b": { "c": 3 } }));
/// let leaves = Cell::new(0);
///
/// let callbacks = TraverseCallbacks::new()
///     .on_mapping(|_entries, ctx, next| {
///         // Only descend into the root mapping.
///         if ctx.depth() == 0 { next.proceed(ctx) } else { Ok(()) }
///     })
///     .on_primitive(|_value, _ctx| {
///         leaves.set(leaves.get() + 1);
///         Ok(())
///     });
///
/// traverse(&tree, &callbacks)?;
/// assert_eq!(leaves.get(), 2);
/// # Ok::<(), jtraverse_core::TraverseError>(())
/// ```
#[derive(Default)]
pub struct TraverseCallbacks<'a> {
    sequence: Option<Box<SequenceCallback<'a>>>,
    mapping: Option<Box<MappingCallback<'a>>>,
    primitive: Option<Box<PrimitiveCallback<'a>>>,
}

impl<'a> TraverseCallbacks<'a> {
    /// Creates a configuration with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback invoked for every sequence node.
    pub fn on_sequence<F>(mut self, callback: F) -> Self
    where
        F: for<'c> Fn(&'a [Node], &mut TraversalContext<'a>, Continuation<'c, 'a>) -> Result<()>
            + 'a,
    {
        self.sequence = Some(Box::new(callback));
        self
    }

    /// Alias of [`TraverseCallbacks::on_sequence`].
    pub fn on_array<F>(self, callback: F) -> Self
    where
        F: for<'c> Fn(&'a [Node], &mut TraversalContext<'a>, Continuation<'c, 'a>) -> Result<()>
            + 'a,
    {
        self.on_sequence(callback)
    }

    /// Sets the callback invoked for every mapping node.
    pub fn on_mapping<F>(mut self, callback: F) -> Self
    where
        F: for<'c> Fn(&'a Mapping, &mut TraversalContext<'a>, Continuation<'c, 'a>) -> Result<()>
            + 'a,
    {
        self.mapping = Some(Box::new(callback));
        self
    }

    /// Alias of [`TraverseCallbacks::on_mapping`].
    pub fn on_object<F>(self, callback: F) -> Self
    where
        F: for<'c> Fn(&'a Mapping, &mut TraversalContext<'a>, Continuation<'c, 'a>) -> Result<()>
            + 'a,
    {
        self.on_mapping(callback)
    }

    /// Sets the callback invoked for every primitive leaf.
    pub fn on_primitive<F>(mut self, callback: F) -> Self
    where
        F: Fn(Primitive<'a>, &mut TraversalContext<'a>) -> Result<()> + 'a,
    {
        self.primitive = Some(Box::new(callback));
        self
    }

    pub fn has_sequence_callback(&self) -> bool {
        self.sequence.is_some()
    }

    pub fn has_mapping_callback(&self) -> bool {
        self.mapping.is_some()
    }

    pub fn has_primitive_callback(&self) -> bool {
        self.primitive.is_some()
    }
}

impl fmt::Debug for TraverseCallbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraverseCallbacks")
            .field("sequence", &self.has_sequence_callback())
            .field("mapping", &self.has_mapping_callback())
            .field("primitive", &self.has_primitive_callback())
            .finish()
    }
}

#[derive(Clone, Copy)]
enum Children<'a> {
    Sequence(&'a [Node]),
    Mapping(&'a Mapping),
}

/// Descend handle passed to sequence and mapping callbacks.
///
/// Calling [`proceed`](Continuation::proceed) or
/// [`proceed_filtered`](Continuation::proceed_filtered) walks the node's
/// children with the same callbacks. Dropping it unused prunes the subtree,
/// which includes a callback returning an error before descending.
/// Both methods consume the handle, so a node is descended at most once.
#[must_use = "dropping a continuation skips the node's children"]
pub struct Continuation<'c, 'a> {
    callbacks: &'c TraverseCallbacks<'a>,
    children: Children<'a>,
    used: bool,
}

impl<'c, 'a> Continuation<'c, 'a> {
    fn new(callbacks: &'c TraverseCallbacks<'a>, children: Children<'a>) -> Self {
        Self {
            callbacks,
            children,
            used: false,
        }
    }

    /// Returns the number of children this continuation would walk.
    pub fn len(&self) -> usize {
        match self.children {
            Children::Sequence(items) => items.len(),
            Children::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descends into every child in order.
    pub fn proceed(mut self, ctx: &mut TraversalContext<'a>) -> Result<()> {
        self.used = true;
        let mut visitor = CallbackVisitor::new(self.callbacks);
        match self.children {
            Children::Sequence(items) => walk_sequence(&mut visitor, items, ctx),
            Children::Mapping(entries) => walk_mapping(&mut visitor, entries, ctx),
        }
    }

    /// Descends only into the children for which `keep` returns true.
    ///
    /// Sequence elements arrive as [`ChildRef::Element`], mapping entries as
    /// [`ChildRef::Entry`].
    pub fn proceed_filtered<F>(mut self, ctx: &mut TraversalContext<'a>, keep: F) -> Result<()>
    where
        F: FnMut(ChildRef<'a>) -> bool,
    {
        self.used = true;
        let mut visitor = CallbackVisitor::new(self.callbacks);
        match self.children {
            Children::Sequence(items) => walk_sequence_filtered(&mut visitor, items, ctx, keep),
            Children::Mapping(entries) => walk_mapping_filtered(&mut visitor, entries, ctx, keep),
        }
    }
}

impl fmt::Debug for Continuation<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("children", &self.len())
            .finish_non_exhaustive()
    }
}

impl Drop for Continuation<'_, '_> {
    fn drop(&mut self) {
        if !self.used {
            debug!(children = self.len(), "Continuation dropped unused");
        }
    }
}

/// Adapts a set of callbacks to the [`Visitor`] trait.
pub(crate) struct CallbackVisitor<'c, 'a> {
    callbacks: &'c TraverseCallbacks<'a>,
}

impl<'c, 'a> CallbackVisitor<'c, 'a> {
    pub(crate) fn new(callbacks: &'c TraverseCallbacks<'a>) -> Self {
        Self { callbacks }
    }
}

impl<'a> Visitor<'a> for CallbackVisitor<'_, 'a> {
    fn visit_sequence(&mut self, items: &'a [Node], ctx: &mut TraversalContext<'a>) -> Result<()> {
        let next = Continuation::new(self.callbacks, Children::Sequence(items));
        match &self.callbacks.sequence {
            Some(callback) => callback(items, ctx, next),
            None => next.proceed(ctx),
        }
    }

    fn visit_mapping(
        &mut self,
        entries: &'a Mapping,
        ctx: &mut TraversalContext<'a>,
    ) -> Result<()> {
        let next = Continuation::new(self.callbacks, Children::Mapping(entries));
        match &self.callbacks.mapping {
            Some(callback) => callback(entries, ctx, next),
            None => next.proceed(ctx),
        }
    }

    fn visit_primitive(
        &mut self,
        value: Primitive<'a>,
        ctx: &mut TraversalContext<'a>,
    ) -> Result<()> {
        match &self.callbacks.primitive {
            Some(callback) => callback(value, ctx),
            None => Ok(()),
        }
    }
}
