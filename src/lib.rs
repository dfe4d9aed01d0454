//! Bracktree is a library to parse labeled ordered document trees from
//! bracket notation and to cost their edits for tree edit distance.
//!
//! Documents like `{html{body{#text:Hello}{br}}}` encode elements (a tag
//! name followed by child nodes) and text leaves (the reserved name `#text`,
//! a colon and literal content). Core functionality provided:
//! - Parser: Quote-aware matching of nested delimiters, so text content may
//!   contain delimiter characters (see [crate::bracket]).
//! - Tree builder: You can use the provided [LabeledTree] or
//!   provide your own TreeBuilder trait implementation (see [crate::model]).
//! - Writer: Serialize trees back to bracket notation.
//! - Cost model: Delete, insert and rename costs as consumed by tree edit
//!   distance algorithms, with forbidden renames across tags and node kinds
//!   (see [crate::cost]).
//!
//! Limitations:
//! - Only the fixed bracket dialect; no whitespace between sibling nodes
//! - Attributes are stored but neither parsed nor costed
//!
//! # Usage patterns
//! 1. Quick functions with default settings, see [crate::bracket].
//! 2. Configure a [BracketParser](crate::bracket::BracketParser) for full
//!    control over the tree builder and the maximum nesting depth.
//!
//! ## Example
//! ```
//! use bracktree::parse_bracket_str;
//! use bracktree::cost::{Cost, CostModel, DocumentCostModel};
//!
//! let old = parse_bracket_str("{p{#text:Hello}{br}}").unwrap();
//! let new = parse_bracket_str("{p{#text:Hello world}{br}}").unwrap();
//!
//! let model = DocumentCostModel;
//! let (old_text, new_text) = (&old[1], &new[1]);
//! assert_eq!(model.rename_cost(old_text, new_text), Cost::ONE);
//! assert_eq!(model.rename_cost(old.root(), new.root()), Cost::ZERO);
//! ```

pub mod bracket;
pub mod cost;
pub mod model;
pub mod parser;

use crate::model::LabeledTree;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Parse a bracket notation string using default settings,
/// returning a [LabeledTree].
///
/// See [`bracket::parse_str`] for full documentation of this convenience function.
pub fn parse_bracket_str<S: AsRef<str>>(text: S) -> Result<LabeledTree, ParsingError> {
    bracket::parse_str(text)
}

/// Parse the bracket notation document stored in a file using default settings,
/// returning a [LabeledTree].
///
/// See [`bracket::parse_file`] for full documentation of this convenience function.
pub fn parse_bracket_file<P: AsRef<Path>>(path: P) -> Result<LabeledTree, ParsingError> {
    bracket::parse_file(path)
}
