//! Trait for constructing document trees during parsing.
//!
//! The [`TreeBuilder`] trait decouples the bracket parser from concrete tree
//! representations. The parser calls builder methods as it descends through
//! the bracket notation, and the builder assembles whatever tree structure
//! it wants.
//!
//! # Built-in implementation
//! * [`LabeledTreeBuilder`] - Builds [`LabeledTree`] (arena of [`Node`]s)
//!
//! # Custom implementations
//! You can implement [`TreeBuilder`] to construct your own tree representation,
//! e.g. the node type of an external tree edit distance engine, while reusing
//! the parsing logic.
//!
//! # Builder lifecycle
//! A builder can construct multiple trees sequentially:
//!
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ make_leaf/add_child ──→ finish_tree() ──→ Empty
//!   ↑                                                                                │
//!   └────────────────────────────────────────────────────────────────────────────────┘
//! ```
// Imports for doc links
#[allow(unused_imports)]
use crate::model::{LabeledTree, LabeledTreeBuilder, Node};

use crate::model::node_label::NodeLabel;

// =#========================================================================#=
// TREE BUILDER (trait)
// =#========================================================================T=
/// Abstraction for constructing trees during parsing.
///
/// The parser drives the lifecycle:
///
/// 1. [`init_next`](Self::init_next) -> prepare for a new tree
/// 2. [`make_leaf`](Self::make_leaf), [`add_child`](Self::add_child) -> build structure
/// 3. [`finish_tree`](Self::finish_tree) -> finalize and return the tree
///
/// Trees are built bottom-up: a child subtree is complete before it is
/// passed to [`add_child`](Self::add_child), and children of one parent are
/// added in document order. If parsing fails midway, the parser abandons the
/// partial tree and calls [`init_next`](Self::init_next) before the next one.
pub trait TreeBuilder {
    /// The type used to identify nodes during construction.
    type NodeIdx: Copy;

    /// The tree type produced by this builder.
    type Tree;

    /// Prepares the builder for constructing a new tree.
    ///
    /// # Arguments
    /// * `capacity` — Upper bound on the number of nodes (hint for allocation)
    fn init_next(&mut self, capacity: usize);

    /// Creates a node without children carrying `label`.
    fn make_leaf(&mut self, label: NodeLabel) -> Self::NodeIdx;

    /// Appends the finished subtree `child` as last child of `parent`.
    ///
    /// The parser never calls this with a text leaf as parent.
    fn add_child(&mut self, parent: Self::NodeIdx, child: Self::NodeIdx);

    /// Finalizes the building process with `root` as root and returns
    /// the resulting tree, leaving the builder empty.
    ///
    /// Returns `None` if [`init_next`](Self::init_next) was not called.
    fn finish_tree(&mut self, root: Self::NodeIdx) -> Option<Self::Tree>;
}
