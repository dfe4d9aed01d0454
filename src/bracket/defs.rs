//! Constants and definitions for bracket notation parsing and writing.

/// Default bound on nesting depth (root has depth 1)
pub(crate) const DEFAULT_MAX_DEPTH: usize = 512;

/// Separates the text marker from the literal content of a text leaf
pub(crate) const TEXT_CONTENT_SEPARATOR: char = ':';

/// Extra chars per node in bracket string length/capacity estimate
pub(crate) const BUFFER_CHARS_PER_NODE: usize = 2;
