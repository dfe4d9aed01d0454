//! Cost models consumed by tree edit distance algorithms.

use crate::cost::Cost;
use crate::model::{Node, NodeLabel};

// =#========================================================================#=
// COST MODEL (trait)
// =#========================================================================T=
/// Per-operation costs for an edit distance over trees with nodes of type `N`.
///
/// Deleting and inserting are always allowed and return a plain
/// non-negative cost; renaming may be [forbidden](Cost::Forbidden).
pub trait CostModel<N: ?Sized> {
    /// Cost of deleting `node`.
    fn delete_cost(&self, node: &N) -> f64;

    /// Cost of inserting `node`.
    fn insert_cost(&self, node: &N) -> f64;

    /// Cost of renaming the label of `from` into the label of `to`.
    fn rename_cost(&self, from: &N, to: &N) -> Cost;
}

// =#========================================================================#=
// DOCUMENT COST MODEL
// =#========================================================================$=
/// Unit cost model for document trees.
///
/// | Operation | Cost |
/// |-----------|------|
/// | delete, insert | 1 |
/// | rename, names differ | [Cost::Forbidden] |
/// | rename text leaf, same content | 0 |
/// | rename text leaf, different content | 1 |
/// | rename element, same tag | 0 |
///
/// Renames thus never turn one tag into another or a text leaf into an
/// element. Differing text content costs 1 regardless of how different the
/// texts are. Attributes are not costed.
///
/// # Example
/// ```
/// use bracktree::cost::{Cost, CostModel, DocumentCostModel};
/// use bracktree::model::NodeLabel;
///
/// let model = DocumentCostModel;
/// let foo = NodeLabel::text("foo");
/// let bar = NodeLabel::text("bar");
/// let div = NodeLabel::element("div");
///
/// assert_eq!(model.rename_cost(&foo, &foo), Cost::ZERO);
/// assert_eq!(model.rename_cost(&foo, &bar), Cost::ONE);
/// assert_eq!(model.rename_cost(&foo, &div), Cost::Forbidden);
/// assert_eq!(model.delete_cost(&div), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCostModel;

impl CostModel<NodeLabel> for DocumentCostModel {
    fn delete_cost(&self, _node: &NodeLabel) -> f64 {
        1.0
    }

    fn insert_cost(&self, _node: &NodeLabel) -> f64 {
        1.0
    }

    fn rename_cost(&self, from: &NodeLabel, to: &NodeLabel) -> Cost {
        if from.name() != to.name() {
            return Cost::Forbidden;
        }

        if from.is_text() && from.content() != to.content() {
            Cost::ONE
        } else {
            // TODO: decide whether differing attributes of equal tags should cost
            Cost::ZERO
        }
    }
}

impl CostModel<Node> for DocumentCostModel {
    fn delete_cost(&self, node: &Node) -> f64 {
        <Self as CostModel<NodeLabel>>::delete_cost(self, node.label())
    }

    fn insert_cost(&self, node: &Node) -> f64 {
        <Self as CostModel<NodeLabel>>::insert_cost(self, node.label())
    }

    fn rename_cost(&self, from: &Node, to: &Node) -> Cost {
        <Self as CostModel<NodeLabel>>::rename_cost(self, from.label(), to.label())
    }
}
