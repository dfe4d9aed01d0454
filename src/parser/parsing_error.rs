//! Error types for the bracket notation parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while parsing bracket notation documents.
//! Errors are never recovered from: a document is either parsed completely
//! or rejected.

use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur during bracket notation parsing.
#[derive(PartialEq, Debug, Clone, Error)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Malformed span - {0}")]
    MalformedSpan(String),
    #[error("Malformed text node - {0}")]
    MalformedTextNode(String),
    #[error("Invalid child span - {0}")]
    InvalidChildSpan(String),
    #[error("Empty node name")]
    EmptyNodeName,
    #[error("Nesting exceeds maximum depth of {0}")]
    DepthLimitExceeded(usize),
    #[error("Builder not initialized")]
    BuilderNotInitialized,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and following characters).
#[derive(Debug, Error)]
#[error("{kind} at position {position}{}", format_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} chars): {}", context.chars().count(), context)
    }
}

impl ParsingError {
    /// Create a ParsingError for the document `input` at byte `position`
    pub fn at(kind: ParsingErrorType, input: &str, position: usize) -> Self {
        let context: String = input
            .get(position..)
            .map(|rest| rest.chars().take(DEFAULT_CONTEXT_LENGTH).collect())
            .unwrap_or_default();
        Self {
            kind,
            position,
            context,
        }
    }

    /// Convenience constructor for MalformedSpan
    pub fn malformed_span(input: &str, position: usize, msg: String) -> Self {
        Self::at(ParsingErrorType::MalformedSpan(msg), input, position)
    }

    /// Convenience constructor for MalformedTextNode
    pub fn malformed_text_node(input: &str, position: usize, msg: String) -> Self {
        Self::at(ParsingErrorType::MalformedTextNode(msg), input, position)
    }

    /// Convenience constructor for InvalidChildSpan
    pub fn invalid_child_span(input: &str, position: usize, msg: String) -> Self {
        Self::at(ParsingErrorType::InvalidChildSpan(msg), input, position)
    }

    /// Convenience constructor for EmptyNodeName
    pub fn empty_node_name(input: &str, position: usize) -> Self {
        Self::at(ParsingErrorType::EmptyNodeName, input, position)
    }

    /// Convenience constructor for DepthLimitExceeded
    pub fn depth_limit_exceeded(input: &str, position: usize, max_depth: usize) -> Self {
        Self::at(ParsingErrorType::DepthLimitExceeded(max_depth), input, position)
    }

    /// Create a ParsingError without parser context (for builder errors)
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the byte position where the failing unit starts
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the characters following the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        Self::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}

// =#========================================================================#=
// TESTS
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let err = ParsingError::malformed_span("{A{B}", 2, "unbalanced".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed span - unbalanced at position 2\n  Context (next 3 chars): {B}"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = ParsingError::without_context(ParsingErrorType::BuilderNotInitialized);
        assert_eq!(err.to_string(), "Builder not initialized at position 0");
    }

    #[test]
    fn test_context_is_truncated() {
        let input = "x".repeat(200);
        let err = ParsingError::at(ParsingErrorType::EmptyNodeName, &input, 10);
        assert_eq!(err.context().len(), DEFAULT_CONTEXT_LENGTH);
    }

    #[test]
    fn test_position_past_char_boundary_gives_empty_context() {
        let err = ParsingError::at(ParsingErrorType::EmptyNodeName, "ü", 1);
        assert_eq!(err.context(), "");
    }
}
