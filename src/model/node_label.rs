//! Label data carried by every node of a document tree.

/// Reserved name marking a text leaf.
pub const TEXT_NODE_NAME: &str = "#text";

// =#========================================================================#=
// ATTRIBUTE
// =#========================================================================#=
/// Name/value pair attached to an element label.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

// =#========================================================================#=
// NODE LABEL
// =#========================================================================#=
/// Data held by a node: a name, text content and attributes.
///
/// A label is either
/// - a **text leaf**, named [TEXT_NODE_NAME], whose `content` holds the
///   literal text verbatim (no escaping applied), or
/// - an **element**, named by its tag, whose `content` is always empty.
///
/// # Invariants
/// - `name` is non-empty
/// - Text labels never carry attributes (guaranteed by the constructors)
/// - Labels are immutable once constructed
///
/// Attributes are stored in order but are not part of the bracket grammar,
/// so parsed labels never have any; they exist for programmatic construction.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct NodeLabel {
    name: String,
    content: String,
    attributes: Vec<Attribute>,
}

impl NodeLabel {
    /// Creates a text leaf label holding `content` verbatim.
    ///
    /// # Example
    /// ```
    /// use bracktree::model::NodeLabel;
    ///
    /// let label = NodeLabel::text("a {b");
    /// assert!(label.is_text());
    /// assert_eq!(label.name(), "#text");
    /// assert_eq!(label.content(), "a {b");
    /// ```
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            name: TEXT_NODE_NAME.to_string(),
            content: content.into(),
            attributes: Vec::new(),
        }
    }

    /// Creates an element label with the given tag name and no attributes.
    ///
    /// # Panics
    /// Panics if `name` is empty or equals [TEXT_NODE_NAME].
    pub fn element(name: impl Into<String>) -> Self {
        Self::element_with_attributes(name, Vec::new())
    }

    /// Creates an element label with the given tag name and attributes.
    ///
    /// # Panics
    /// Panics if `name` is empty or equals [TEXT_NODE_NAME].
    pub fn element_with_attributes(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "element name must be non-empty");
        assert!(name != TEXT_NODE_NAME, "element must not use the text marker as name");
        Self {
            name,
            content: String::new(),
            attributes,
        }
    }

    /// Returns the node name (tag, or [TEXT_NODE_NAME] for text leaves).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the literal text content; empty for elements.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the attributes in insertion order; empty for text leaves.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns whether this label denotes a text leaf.
    pub fn is_text(&self) -> bool {
        self.name == TEXT_NODE_NAME
    }
}
