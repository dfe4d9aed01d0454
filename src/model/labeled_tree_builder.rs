//! Provides [TreeBuilder] implementation struct for [LabeledTree].

use crate::model::node_label::NodeLabel;
use crate::model::tree_builder::TreeBuilder;
use crate::model::{LabeledTree, NodeIndex};

/// Builder that constructs [LabeledTree] instances.
///
/// # Example
/// ```
/// use bracktree::bracket::BracketParser;
///
/// let mut parser = BracketParser::new_defaults();
/// let trees = parser.parse_all(["{A{B}}", "{#text:x}"])?;
/// assert_eq!(trees.len(), 2);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct LabeledTreeBuilder {
    current_tree: Option<LabeledTree>,
}

impl LabeledTreeBuilder {
    /// Creates a new builder in the empty state.
    pub fn new() -> Self {
        Self { current_tree: None }
    }
}

impl Default for LabeledTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder for LabeledTreeBuilder {
    type NodeIdx = NodeIndex;
    type Tree = LabeledTree;

    fn init_next(&mut self, capacity: usize) {
        self.current_tree = Some(LabeledTree::new(capacity));
    }

    fn make_leaf(&mut self, label: NodeLabel) -> Self::NodeIdx {
        let tree = self.current_tree.get_or_insert_with(|| LabeledTree::new(0));
        tree.add_node(label)
    }

    fn add_child(&mut self, parent: Self::NodeIdx, child: Self::NodeIdx) {
        if let Some(tree) = &mut self.current_tree {
            tree.add_child(parent, child);
        }
    }

    fn finish_tree(&mut self, root: Self::NodeIdx) -> Option<Self::Tree> {
        let mut tree = self.current_tree.take()?;
        tree.set_root(root);
        Some(tree)
    }
}
