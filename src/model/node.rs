//! Node module for document tree representation.

use crate::model::node_label::NodeLabel;
use crate::model::tree::NodeIndex;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node in a [LabeledTree](crate::model::LabeledTree).
///
/// A node owns exactly one [NodeLabel] and refers to its children (in
/// document order) and its parent by [NodeIndex] into the tree arena.
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - `parent` is `None` only for the root (and during construction)
/// - Text leaves have no children
#[derive(PartialEq, Debug, Clone)]
pub struct Node {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Label carried by this node
    label: NodeLabel,
    /// Index of the parent node, if attached
    parent: Option<NodeIndex>,
    /// Indices of the children, in document order
    children: Vec<NodeIndex>,
}

impl Node {
    /// Creates a new node without parent and children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `label` - The label carried by this node
    pub fn new(index: NodeIndex, label: NodeLabel) -> Self {
        Node {
            index,
            label,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the label of this node.
    pub fn label(&self) -> &NodeLabel {
        &self.label
    }

    /// Returns the name of this node's label.
    pub fn name(&self) -> &str {
        self.label.name()
    }

    /// Returns the parent index, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns whether a parent has been set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the children indices in document order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node is a text leaf.
    pub fn is_text(&self) -> bool {
        self.label.is_text()
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }
}
