/// Defines the decision tree weak learner.
pub mod dtree;

/// Defines the weighted entropy and the binned information gain.
mod histogram;

/// Defines the inner representation of `DecisionTree`.
mod node;


pub use dtree::{DecisionTree, DecisionTreeConfig};
pub use histogram::DEFAULT_N_BINS;
pub use node::{Node, BranchNode, LeafNode};
