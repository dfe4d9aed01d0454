//! Bracket notation parser and writer for document trees.
//!
//! This module provides [BracketParser] to parse bracket notation strings
//! into tree structures. The parser uses a
//! [TreeBuilder](crate::model::TreeBuilder) internally.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses a single string, returns a [LabeledTree]
//! * [`parse_file`] - parses the document stored in a file
//! * [`parse_documents`] - parses independent documents in parallel
//!
//! # Full API
//! For more control, configure a [BracketParser]:
//! * [`BracketParser::parse_str`] - parse a single document
//! * [`BracketParser::parse_all`] - parse several documents
//!
//! # Format
//! The bracket notation has the following grammar:
//! * `node ::= '{' (text_node | element_node) '}'`
//! * `text_node ::= '#text' ':' raw_content`
//! * `element_node ::= name node*`
//!
//! Furthermore:
//! * `raw_content` is taken verbatim and never searched for nested nodes.
//!   Delimiters inside double quotes (`"a{b"`) are ignored when matching
//!   braces, so content holding unbalanced delimiters should be quoted.
//! * No whitespace is allowed between sibling nodes; the element name is
//!   everything up to its first child.
//! * Text before the first `{` and after the last `}` of a document is ignored.

mod defs;
pub mod parser;
pub mod writer;

pub use parser::{BracketParser, parse_label, split_children};
pub use writer::{to_bracket, write_bracket_file};

use crate::model::LabeledTree;
use crate::parser::ParsingError;
use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single bracket notation string to obtain a [LabeledTree].
///
/// This is a convenience function using default settings and thus not
/// requiring configuration of a parser.
///
/// # Arguments
/// * `text` - The bracket notation string to parse
///
/// # Returns
/// * [LabeledTree] - Tree parsed from the string
/// * [ParsingError] - If the string is not valid bracket notation
///
/// # Example
/// ```
/// use bracktree::bracket::parse_str;
///
/// let tree = parse_str("{A{#text:hello}{B}}")?;
/// let root = tree.root();
/// assert_eq!(root.name(), "A");
/// assert_eq!(root.num_children(), 2);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<LabeledTree, ParsingError> {
    BracketParser::new_defaults().parse_str(text.as_ref())
}

/// Parses the bracket notation document stored in a file.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [LabeledTree] - Tree parsed from the file content
/// * [ParsingError] - If file reading fails or the content is not valid bracket notation
///
/// # Example
/// ```no_run
/// use bracktree::bracket::parse_file;
///
/// let tree = parse_file("page.bracket")?;
/// println!("Parsed {} nodes", tree.num_nodes());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<LabeledTree, ParsingError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(text)
}

/// Parses independent documents in parallel with default settings.
///
/// Returns one result per document, in input order; a malformed document
/// does not affect the others.
///
/// # Example
/// ```
/// use bracktree::bracket::parse_documents;
///
/// let results = parse_documents(&["{A{B}}", "{A{B}", "{#text:x}"]);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// assert!(results[2].is_ok());
/// ```
pub fn parse_documents<S: AsRef<str> + Sync>(documents: &[S]) -> Vec<Result<LabeledTree, ParsingError>> {
    debug!(num_documents = documents.len(), "parsing documents in parallel");
    documents
        .par_iter()
        .map(|document| parse_str(document.as_ref()))
        .collect()
}
