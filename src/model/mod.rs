//! Data model for labeled ordered document trees.
//!
//! # Tree representation
//! Trees are represented by [LabeledTree], which uses the arena pattern to
//! store [Node]s referenced by [NodeIndex]. Each node owns one [NodeLabel]:
//! either a text leaf (named [TEXT_NODE_NAME], carrying literal content) or
//! an element (carrying a tag name and [Attribute]s, and possibly children).
//!
//! # Building trees
//! Trees are constructed during parsing via the [TreeBuilder] trait, which
//! decouples the parser from concrete tree types:
//!
//! - [LabeledTreeBuilder] → [LabeledTree]
//!
//! You can implement [TreeBuilder] to construct your own tree representation
//! while reusing the library's parser.

pub mod labeled_tree_builder;
pub mod node;
pub mod node_label;
pub mod tree;
pub mod tree_builder;

pub use labeled_tree_builder::LabeledTreeBuilder;
pub use node::Node;
pub use node_label::{Attribute, NodeLabel, TEXT_NODE_NAME};
pub use tree::{LabeledTree, NodeIndex};
pub use tree_builder::TreeBuilder;
