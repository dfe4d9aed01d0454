//! Edit costs for comparing document trees.
//!
//! A tree edit distance engine asks a [CostModel] for the cost of deleting,
//! inserting and renaming nodes. [DocumentCostModel] biases the resulting
//! edit script towards structural similarity: renames are only free between
//! nodes of identical kind and tag.
//!
//! Forbidden renames are expressed as [`Cost::Forbidden`] rather than as a
//! huge number, so engines handle them exhaustively.

pub mod cost_model;
pub mod edit_cost;

pub use cost_model::{CostModel, DocumentCostModel};
pub use edit_cost::Cost;
