//! Bracket notation writing for document trees.

use crate::bracket::defs::{BUFFER_CHARS_PER_NODE, TEXT_CONTENT_SEPARATOR};
use crate::model::{LabeledTree, NodeIndex, TEXT_NODE_NAME};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Writes given list of trees to a file in bracket notation, one tree per line.
///
/// Only names and text contents are written; attributes have no
/// representation in bracket notation.
///
/// # Errors
/// Returns an I/O error if writing fails.
///
/// # Example
/// ```ignore
/// use bracktree::bracket::write_bracket_file;
/// use std::fs::File;
///
/// let file = File::create("documents.txt")?;
/// write_bracket_file(file, &your_trees)?;
/// ```
pub fn write_bracket_file(file: File, trees: &[LabeledTree]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for tree in trees {
        writer.write_all(to_bracket(tree).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}

/// Returns the bracket notation of this tree.
///
/// Text leaves are written as `{#text:content}` with the content verbatim,
/// elements as `{name` followed by their children and `}`.
/// Returns an empty string if the root is not set.
///
/// # Example
/// ```
/// use bracktree::bracket::to_bracket;
/// use bracktree::model::{LabeledTree, NodeLabel};
///
/// let mut tree = LabeledTree::new(2);
/// let root = tree.add_node(NodeLabel::element("A"));
/// let text = tree.add_node(NodeLabel::text("x{y"));
/// tree.add_child(root, text);
/// tree.set_root(root);
///
/// assert_eq!(to_bracket(&tree), "{A{#text:x{y}}");
/// ```
pub fn to_bracket(tree: &LabeledTree) -> String {
    enum Step {
        Open(NodeIndex),
        Close,
    }

    if !tree.is_root_set() {
        return String::new();
    }

    let mut bracket = String::with_capacity(estimate_bracket_len(tree));
    let mut stack = vec![Step::Open(tree.root_index())];
    while let Some(step) = stack.pop() {
        let index = match step {
            Step::Open(index) => index,
            Step::Close => {
                bracket.push('}');
                continue;
            }
        };

        let node = &tree[index];
        bracket.push('{');
        if node.is_text() {
            bracket.push_str(TEXT_NODE_NAME);
            bracket.push(TEXT_CONTENT_SEPARATOR);
            bracket.push_str(node.label().content());
            bracket.push('}');
        } else {
            bracket.push_str(node.name());
            stack.push(Step::Close);
            stack.extend(node.children().iter().rev().map(|&child| Step::Open(child)));
        }
    }

    bracket
}

/// Estimates the length of the bracket string of the given tree.
fn estimate_bracket_len(tree: &LabeledTree) -> usize {
    tree.pre_order_iter()
        .map(|node| {
            let label = node.label();
            label.name().len() + label.content().len() + BUFFER_CHARS_PER_NODE + 1
        })
        .sum()
}
