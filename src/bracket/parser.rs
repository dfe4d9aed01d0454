//! Structs and logic to parse bracket notation documents.
//!
//! This module provides the [BracketParser] struct and the two pure building
//! blocks it descends with: [split_children] and [parse_label].

use crate::bracket::defs::{DEFAULT_MAX_DEPTH, TEXT_CONTENT_SEPARATOR};
use crate::model::{LabeledTreeBuilder, NodeLabel, TEXT_NODE_NAME, TreeBuilder};
use crate::parser::delimiter::matching_bracket;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use tracing::{debug, trace};

// =#========================================================================#=
// BRACKET PARSER
// =#========================================================================$=
/// Parser (configuration) for bracket notation documents.
///
/// Generic over [TreeBuilder] (construction), so the same descent can
/// build a [LabeledTree](crate::model::LabeledTree) or a tree type of an
/// external edit distance engine.
///
/// # Construction
/// * [`new(tree_builder)`](Self::new) — generic constructor
/// * [`new_defaults()`](Self::new_defaults) — uses [LabeledTreeBuilder]
///
/// # Configuration
/// * [`with_max_depth(max_depth)`](Self::with_max_depth)
///     - Bounds the nesting depth (and thereby the recursion depth of the
///       parser). Deeper documents are rejected with
///       [DepthLimitExceeded](ParsingErrorType::DepthLimitExceeded).
///       Defaults to 512.
///
/// # Parsing
/// * [`parse_str`](Self::parse_str) — Parse single document
/// * [`parse_all`](Self::parse_all) — Parse several documents, stopping at the first error
///
/// # Example
/// ```
/// use bracktree::bracket::BracketParser;
///
/// let mut parser = BracketParser::new_defaults().with_max_depth(64);
/// let tree = parser.parse_str("{A{#text:hello}{B}}").unwrap();
///
/// assert_eq!(tree.root().name(), "A");
/// assert_eq!(tree.num_nodes(), 3);
/// ```
#[derive(Debug)]
pub struct BracketParser<T: TreeBuilder> {
    tree_builder: T,
    max_depth: usize,
}

// ============================================================================
// Construction & Configuration, Deconstruction (pub)
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Creates a new [BracketParser] with the given tree builder.
    pub fn new(tree_builder: T) -> Self {
        Self {
            tree_builder,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth, where the root has depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the configured maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Consumes the parser and returns the tree builder.
    pub fn into_tree_builder(self) -> T {
        self.tree_builder
    }
}

impl BracketParser<LabeledTreeBuilder> {
    /// Creates a new [BracketParser] for [LabeledTree](crate::model::LabeledTree)
    /// with default settings.
    pub fn new_defaults() -> Self {
        Self::new(LabeledTreeBuilder::new())
    }
}

impl Default for BracketParser<LabeledTreeBuilder> {
    fn default() -> Self {
        Self::new_defaults()
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Parses all given documents in order.
    ///
    /// # Returns
    /// * `Ok(Vec<T::Tree>)` - One tree per document
    /// * `Err(ParsingError)` - Error of the first document that fails to parse
    pub fn parse_all<I, S>(&mut self, documents: I) -> Result<Vec<T::Tree>, ParsingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        documents
            .into_iter()
            .map(|document| self.parse_str(document.as_ref()))
            .collect()
    }

    /// Parses a single bracket notation document.
    ///
    /// Anything before the first `{` and after the last `}` is ignored, so
    /// surrounding whitespace or wrapper characters are fine.
    ///
    /// # Returns
    /// * `Ok(T::Tree)` - The complete tree
    /// * `Err(ParsingError)` - If the document is malformed; no partial
    ///   tree is ever returned
    pub fn parse_str(&mut self, text: &str) -> Result<T::Tree, ParsingError> {
        debug!(len = text.len(), "parsing bracket document");

        let (start, end) = outermost_unit(text)?;
        let unit = &text[start..=end];

        // Every node starts with '{', so this bounds the node count
        let capacity = unit.bytes().filter(|&b| b == b'{').count();
        self.tree_builder.init_next(capacity);

        let root = self
            .parse_node(text, start, unit, 1)
            .inspect_err(|err| debug!(error = %err, "rejected bracket document"))?;

        let tree = self
            .tree_builder
            .finish_tree(root)
            .ok_or_else(|| ParsingError::without_context(ParsingErrorType::BuilderNotInitialized))?;
        debug!(max_nodes = capacity, "parsed bracket document");

        Ok(tree)
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl<T: TreeBuilder> BracketParser<T> {
    /// Parses the unit `input[offset..offset + unit.len()]` and its
    /// descendants, adds them to the tree and returns the index of the node.
    ///
    /// The label is parsed first. Only element labels lead to a search for
    /// children: the content of a text leaf is literal and may hold any
    /// delimiter characters.
    fn parse_node(
        &mut self,
        input: &str,
        offset: usize,
        unit: &str,
        depth: usize,
    ) -> Result<T::NodeIdx, ParsingError> {
        if depth > self.max_depth {
            return Err(ParsingError::depth_limit_exceeded(input, offset, self.max_depth));
        }

        let label = label_at(input, offset, unit)?;
        trace!(depth, name = label.name(), "parsed node label");

        if label.is_text() {
            return Ok(self.tree_builder.make_leaf(label));
        }

        // Child units come out of the matcher balanced, the root might not be
        if depth == 1 && matching_bracket(unit, 0) != Some(unit.len() - 1) {
            return Err(ParsingError::malformed_span(
                input,
                offset,
                "unbalanced delimiters in element".to_string(),
            ));
        }

        let children = children_at(input, offset, unit)?.ok_or_else(|| {
            ParsingError::malformed_span(input, offset, "expected '{...}' unit".to_string())
        })?;

        let node = self.tree_builder.make_leaf(label);
        for (child_offset, child) in children {
            let child_index = self.parse_node(input, child_offset, child, depth + 1)?;
            self.tree_builder.add_child(node, child_index);
        }

        Ok(node)
    }
}

// ============================================================================
// Unit level functions (pub)
// ============================================================================
/// Splits a unit `{label{child1}...{childN}}` into its child units.
///
/// # Arguments
/// * `unit` - A single `{...}` unit of an element
///
/// # Returns
/// * `Ok(None)` - If `unit` is not wrapped in `{` and `}` or too short
/// * `Ok(Some(children))` - The child units verbatim and in order;
///   empty if the unit has no children
/// * `Err(ParsingError)` - If a child is not a single balanced `{...}` unit
///
/// # Examples
/// ```
/// # use bracktree::bracket::split_children;
/// assert_eq!(split_children("{A{B}{C}}").unwrap(), Some(vec!["{B}", "{C}"]));
/// assert_eq!(split_children("{A}").unwrap(), Some(vec![]));
/// assert_eq!(split_children("A{B}").unwrap(), None);
/// assert!(split_children("{A{B}").is_err());
/// ```
pub fn split_children(unit: &str) -> Result<Option<Vec<&str>>, ParsingError> {
    let children = children_at(unit, 0, unit)?;
    Ok(children.map(|children| children.into_iter().map(|(_, child)| child).collect()))
}

/// Parses the label of a single `{...}` unit without looking at its children.
///
/// * `{#text:content}` gives a text label with everything after the first
///   `:` as content, taken verbatim.
/// * `{name{child}...}` gives an element label named by everything before
///   the first `{` (or the whole interior for an element without children).
///
/// # Examples
/// ```
/// # use bracktree::bracket::parse_label;
/// let text = parse_label("{#text:a:{b}").unwrap();
/// assert!(text.is_text());
/// assert_eq!(text.content(), "a:{b");
///
/// let element = parse_label("{div{#text:x}}").unwrap();
/// assert_eq!(element.name(), "div");
///
/// assert!(parse_label("{#text}").is_err());
/// ```
pub fn parse_label(unit: &str) -> Result<NodeLabel, ParsingError> {
    label_at(unit, 0, unit)
}

// ============================================================================
// Helpers
// ============================================================================
/// Returns the positions of the first `{` and the last `}` in `text`.
fn outermost_unit(text: &str) -> Result<(usize, usize), ParsingError> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok((start, end)),
        _ => Err(ParsingError::malformed_span(
            text,
            0,
            "no '{...}' unit found".to_string(),
        )),
    }
}

/// Returns whether `unit` is wrapped in braces and has a non-empty interior.
fn is_wrapped(unit: &str) -> bool {
    unit.len() > 2 && unit.starts_with('{') && unit.ends_with('}')
}

/// [parse_label] for a unit starting at byte `offset` of `input`.
fn label_at(input: &str, offset: usize, unit: &str) -> Result<NodeLabel, ParsingError> {
    if !is_wrapped(unit) {
        return Err(ParsingError::malformed_span(
            input,
            offset,
            "expected '{...}' unit".to_string(),
        ));
    }
    let interior = &unit[1..unit.len() - 1];

    if interior.starts_with(TEXT_NODE_NAME) {
        let separator = interior.find(TEXT_CONTENT_SEPARATOR).ok_or_else(|| {
            ParsingError::malformed_text_node(
                input,
                offset,
                format!("missing '{TEXT_CONTENT_SEPARATOR}' after {TEXT_NODE_NAME}"),
            )
        })?;
        let name = &interior[..separator];
        if name != TEXT_NODE_NAME {
            return Err(ParsingError::malformed_text_node(
                input,
                offset,
                format!("expected {TEXT_NODE_NAME} before '{TEXT_CONTENT_SEPARATOR}' but found {name:?}"),
            ));
        }
        return Ok(NodeLabel::text(&interior[separator + 1..]));
    }

    let name = interior.find('{').map_or(interior, |i| &interior[..i]);
    if name.is_empty() {
        return Err(ParsingError::empty_node_name(input, offset));
    }

    Ok(NodeLabel::element(name))
}

/// [split_children] for a unit starting at byte `offset` of `input`,
/// returning each child with its offset in `input`.
fn children_at<'a>(
    input: &str,
    offset: usize,
    unit: &'a str,
) -> Result<Option<Vec<(usize, &'a str)>>, ParsingError> {
    if !is_wrapped(unit) {
        return Ok(None);
    }

    let Some(first) = unit[1..].find('{').map(|i| i + 1) else {
        return Ok(Some(Vec::new()));
    };

    // Children blob is unit[first..end]
    let end = unit.len() - 1;
    let mut children = Vec::new();
    let mut pos = first;
    while pos < end {
        let blob = &unit[pos..end];
        if !blob.starts_with('{') {
            return Err(ParsingError::invalid_child_span(
                input,
                offset + pos,
                format!("expected '{{' but found {:?}", blob.chars().next()),
            ));
        }
        let close = matching_bracket(blob, 0).ok_or_else(|| {
            ParsingError::invalid_child_span(input, offset + pos, "unterminated child".to_string())
        })?;
        children.push((offset + pos, &blob[..=close]));
        pos += close + 1;
    }

    Ok(Some(children))
}
