//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::error::{BoostError, Result};
use crate::params::{ParamWriter, ParamReader};


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}


/// A splitting rule `x[attribute] > threshold`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct Splitter {
    pub(crate) attribute: usize,
    pub(crate) threshold: f32,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(attribute: usize, threshold: f32) -> Self {
        Self { attribute, threshold }
    }


    /// Defines the splitting.
    /// Samples above the threshold go right.
    #[inline]
    pub(crate) fn split(&self, sample: &Sample) -> LR {
        if sample[self.attribute] > self.threshold {
            LR::Right
        } else {
            LR::Left
        }
    }
}


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    // Majority label of the samples that reached this node.
    pub(super) label: f32,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of decision tree.
/// A leaf keeps the rule it failed to split with
/// so that the exported tree is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) rule: Splitter,
    pub(super) label: f32,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(super) fn new(label: f32) -> Self {
        Self { rule: Splitter::default(), label }
    }
}


impl Default for Node {
    /// An untrained tree: a single leaf with label `0`.
    fn default() -> Self {
        Node::Leaf(LeafNode::new(0f32))
    }
}


impl Node {
    #[inline]
    pub(super) fn branch(rule: Splitter, label: f32, left: Node, right: Node)
        -> Self
    {
        Node::Branch(BranchNode {
            rule,
            label,
            left: Box::new(left),
            right: Box::new(right),
        })
    }


    /// Walk from this node to a leaf and return its label.
    #[inline]
    pub(super) fn label(&self, sample: &Sample) -> f32 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf.label,
                Node::Branch(branch) => {
                    node = match branch.rule.split(sample) {
                        LR::Left => &branch.left,
                        LR::Right => &branch.right,
                    };
                },
            }
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub(super) fn leaves(&self) -> usize {
        match self {
            Node::Branch(b) => b.left.leaves() + b.right.leaves(),
            Node::Leaf(_) => 1,
        }
    }


    /// Returns the depth of this sub-tree. A single leaf has depth `0`.
    pub(super) fn depth(&self) -> usize {
        match self {
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
            Node::Leaf(_) => 0,
        }
    }


    /// Returns one past the largest attribute a branch splits on.
    /// Leaves never read their rule.
    pub(super) fn min_attributes(&self) -> usize {
        match self {
            Node::Branch(b) => (b.rule.attribute + 1)
                .max(b.left.min_attributes())
                .max(b.right.min_attributes()),
            Node::Leaf(_) => 0,
        }
    }


    /// Write this node and then its children in preorder:
    /// `attribute, threshold, label, has_left, has_right, [left], [right]`.
    pub(super) fn export(&self, params: &mut ParamWriter) {
        match self {
            Node::Branch(b) => {
                params.field(b.rule.attribute);
                params.field(b.rule.threshold);
                params.field(b.label);
                params.field(1);
                params.field(1);
                b.left.export(params);
                b.right.export(params);
            },
            Node::Leaf(l) => {
                params.field(l.rule.attribute);
                params.field(l.rule.threshold);
                params.field(l.label);
                params.field(0);
                params.field(0);
            },
        }
    }


    /// Read a node written by [`Node::export`].
    pub(super) fn import(params: &mut ParamReader<'_>) -> Result<Self> {
        let attribute = params.field::<usize>("split attribute")?;
        let threshold = params.field::<f32>("split threshold")?;
        let label = params.field::<f32>("node label")?;
        let has_left = params.field::<u8>("has child 0")?;
        let has_right = params.field::<u8>("has child 1")?;

        let rule = Splitter::new(attribute, threshold);
        match (has_left, has_right) {
            (0, 0) => Ok(Node::Leaf(LeafNode { rule, label })),
            (1, 1) => {
                let left = Node::import(params)?;
                let right = Node::import(params)?;
                Ok(Node::branch(rule, label, left, right))
            },
            (l, r) => Err(BoostError::MalformedNode(l, r)),
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"x[{feat}] > {thr:.2} ?\" ];\n",
                    feat = b.rule.attribute,
                    thr = b.rule.threshold
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"No\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"Yes\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = l.label
                );

                (vec![info], id + 1)
            }
        }
    }
}
