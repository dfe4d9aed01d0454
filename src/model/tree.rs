//! Provides the arena-based document tree.
//!
//! * [LabeledTree] - ordered, arbitrarily branching tree of [Node]s
//! * [NodeIndex] as type used to index nodes in tree
//! * [PostOrderIter] / [PreOrderIter] for stack-based traversal

use crate::bracket;
use crate::model::node::Node;
use crate::model::node_label::NodeLabel;
use std::fmt;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: NodeIndex = usize::MAX;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// An ordered labeled tree represented using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex],
/// so no node holds a reference to another node.
///
/// # Structure
/// - All nodes are stored in the arena; the index of the root is maintained.
/// - Children are ordered (document order) and each node has at most one parent.
/// - Text leaves ([NodeLabel::is_text]) never have children.
///
/// # Construction
/// Add nodes with [`add_node`](Self::add_node), wire them together with
/// [`add_child`](Self::add_child) and mark the root with
/// [`set_root`](Self::set_root). Test validity with [`is_valid`](Self::is_valid).
///
/// # Example
/// ```
/// use bracktree::model::{LabeledTree, NodeLabel};
///
/// let mut tree = LabeledTree::new(3);
/// let root = tree.add_node(NodeLabel::element("p"));
/// let text = tree.add_node(NodeLabel::text("hello"));
/// let br = tree.add_node(NodeLabel::element("br"));
/// tree.add_child(root, text);
/// tree.add_child(root, br);
/// tree.set_root(root);
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.to_bracket(), "{p{#text:hello}{br}}");
/// ```
#[derive(PartialEq, Debug, Clone)]
pub struct LabeledTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node>,

    /// Index of the root of this tree
    root_index: NodeIndex,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl LabeledTree {
    /// Creates a new, empty tree with room for `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        LabeledTree {
            nodes: Vec::with_capacity(capacity),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds a node without children to the tree, assigning a unique index,
    /// which gets returned.
    pub fn add_node(&mut self, label: NodeLabel) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new(index, label));
        index
    }

    /// Appends `child` as last child of `parent`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds, if `parent` is a text leaf,
    /// or if `child` already has a parent.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        assert!(!self[parent].is_text(), "text leaf {parent} cannot have children");
        assert!(!self[child].has_parent(), "node {child} is already attached");
        self.nodes[child].set_parent(parent);
        self.nodes[parent].push_child(child);
    }

    /// Marks the node at `index` as root of this tree.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_root(&mut self, index: NodeIndex) {
        assert!(index < self.nodes.len(), "root index {index} out of bounds");
        self.root_index = index;
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been fully constructed yet.
    pub fn root(&self) -> &Node {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self[index]
    }

    /// Returns the label of the node at the given index.
    pub fn label(&self, index: NodeIndex) -> &NodeLabel {
        self[index].label()
    }

    /// Returns the children of the node at the given index, in document order.
    pub fn children(&self, index: NodeIndex) -> impl Iterator<Item = &Node> + '_ {
        self[index].children().iter().map(move |&child| &self[child])
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of text leaves in this tree.
    pub fn num_text_leaves(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_text()).count()
    }

    /// Returns the number of element nodes in this tree.
    pub fn num_elements(&self) -> usize {
        self.nodes.iter().filter(|&n| !n.is_text()).count()
    }

    /// Returns the number of nodes on the longest root-to-leaf path,
    /// so a single node tree has depth 1 and an unrooted tree depth 0.
    pub fn depth(&self) -> usize {
        if !self.is_root_set() {
            return 0;
        }

        let mut max_depth = 0;
        let mut stack = vec![(self.root_index, 1)];
        while let Some((index, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for &child in self[index].children() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    /// Convenience method to convert this tree to a bracket notation string.
    pub fn to_bracket(&self) -> String {
        bracket::to_bracket(self)
    }

    /// Checks whether `other` has the same shape and the same names and
    /// text contents, in document order. Attributes and arena indices are ignored.
    ///
    /// # Example
    /// ```
    /// use bracktree::bracket::parse_str;
    ///
    /// let a = parse_str("{A{#text:x}{B}}").unwrap();
    /// let b = parse_str("  {A{#text:x}{B}}\n").unwrap();
    /// let c = parse_str("{A{B}{#text:x}}").unwrap();
    /// assert!(a.is_isomorphic_to(&b));
    /// assert!(!a.is_isomorphic_to(&c));
    /// ```
    pub fn is_isomorphic_to(&self, other: &LabeledTree) -> bool {
        if self.is_root_set() != other.is_root_set() {
            return false;
        }
        if !self.is_root_set() {
            return true;
        }

        let mut stack = vec![(self.root_index, other.root_index)];
        while let Some((mine, theirs)) = stack.pop() {
            let (mine, theirs) = (&self[mine], &other[theirs]);
            if mine.name() != theirs.name()
                || mine.label().content() != theirs.label().content()
                || mine.num_children() != theirs.num_children()
            {
                return false;
            }
            stack.extend(mine.children().iter().copied().zip(theirs.children().iter().copied()));
        }

        true
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is set, within bounds and has no parent
    /// - All node indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - All non-root nodes have a parent that lists them as child
    /// - Text leaves have neither children nor attributes
    /// - Every node is reachable from the root
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        // Check root index is set and within bounds
        if self.root_index >= self.nodes.len() {
            return false;
        }
        if self.nodes[self.root_index].has_parent() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            // Check node index matches its arena position
            if node.index() != index {
                return false;
            }

            if node.is_text() && (!node.is_leaf() || !node.label().attributes().is_empty()) {
                return false;
            }

            // Check children point back to this node as parent
            for &child in node.children() {
                if child >= self.nodes.len() || self.nodes[child].parent() != Some(index) {
                    return false;
                }
            }

            // Check parent references
            if index != self.root_index {
                match node.parent() {
                    None => return false,
                    Some(parent) => {
                        if parent >= self.nodes.len() || !self.nodes[parent].children().contains(&index) {
                            return false;
                        }
                    }
                }
            }
        }

        // Every node reachable exactly once
        self.pre_order_iter().count() == self.nodes.len()
    }
}

impl std::ops::Index<NodeIndex> for LabeledTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
/// Draws an outline of the tree.
///
/// # Example Output
/// ```text
/// Tree with 4 nodes (1 text leaves):
///   [0] <html>
///     └─ [1] <body>
///         ├─ [2] "Hello"
///         └─ [3] <br>
/// ```
impl fmt::Display for LabeledTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tree with {} nodes ({} text leaves):",
            self.nodes.len(),
            self.num_text_leaves()
        )?;

        if !self.is_root_set() {
            return writeln!(f, "(No root set)");
        }

        // (index, prefix, is_last)
        let mut stack = vec![(self.root_index, String::new(), true)];
        while let Some((index, prefix, is_last)) = stack.pop() {
            let node = &self[index];
            let connector = if prefix.is_empty() {
                "  "
            } else if is_last {
                "└─ "
            } else {
                "├─ "
            };

            if node.is_text() {
                writeln!(f, "{prefix}{connector}[{index}] {:?}", node.label().content())?;
            } else {
                writeln!(f, "{prefix}{connector}[{index}] <{}>", node.name())?;
            }

            let child_prefix = if prefix.is_empty() {
                "    ".to_string()
            } else {
                format!("{}{}   ", prefix, if is_last { " " } else { "│" })
            };
            let num_children = node.num_children();
            for (i, &child) in node.children().iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i + 1 == num_children));
            }
        }

        Ok(())
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl LabeledTree {
    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Children are visited left to right, which is the node order expected
    /// by postorder-based tree edit distance algorithms.
    ///
    /// # Example
    /// ```
    /// use bracktree::bracket::parse_str;
    ///
    /// let tree = parse_str("{A{B}{C{D}}}").unwrap();
    /// let names: Vec<_> = tree.post_order_iter().map(|n| n.name()).collect();
    /// assert_eq!(names, ["B", "D", "C", "A"]);
    /// ```
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// # Example
    /// ```
    /// use bracktree::bracket::parse_str;
    ///
    /// let tree = parse_str("{A{B}{C{D}}}").unwrap();
    /// let names: Vec<_> = tree.pre_order_iter().map(|n| n.name()).collect();
    /// assert_eq!(names, ["A", "B", "C", "D"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PostOrderIter<'a> {
    tree: &'a LabeledTree,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a LabeledTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.is_leaf() {
                return Some(node);
            }

            self.stack.push((index, true));
            // Push children in reverse, so leftmost is processed first
            for &child in node.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PreOrderIter<'a> {
    tree: &'a LabeledTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a LabeledTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
