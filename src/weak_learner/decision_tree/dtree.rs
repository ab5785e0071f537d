use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::common::checker;
use crate::error::Result;
use crate::params::{ParamWriter, ParamReader};
use crate::weak_learner::WeakLearner;

use super::histogram::{self, DEFAULT_N_BINS};
use super::node::*;


use std::fs::File;
use std::io::prelude::*;
use std::path::Path;


/// Hyperparameters of [`DecisionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTreeConfig {
    /// Number of histogram bins per attribute.
    pub n_bins: usize,
    /// Maximal depth of the tree. `None` grows until the leaves are pure.
    pub max_depth: Option<usize>,
}


impl Default for DecisionTreeConfig {
    fn default() -> Self {
        Self { n_bins: DEFAULT_N_BINS, max_depth: None }
    }
}


/// The Decision Tree algorithm.
/// A binary, ID3-style tree.
/// Each node splits on the attribute of highest weighted information gain,
/// where the gain is measured on a histogram of the attribute
/// over the samples that reached the node.
/// The threshold is the midpoint of the weighted class means.
///
/// A node becomes a leaf when all of its samples
/// are on the same side of `class_index` (counted without weights),
/// when the split leaves one side empty,
/// or when the maximal depth is reached.
/// A leaf predicts `+1` if the members of `class_index`
/// outnumber the rest and `-1` otherwise.
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let samples = vec![
///     Sample::new(vec![0.0], 0),
///     Sample::new(vec![1.0], 0),
///     Sample::new(vec![4.0], 1),
///     Sample::new(vec![5.0], 1),
/// ];
///
/// let mut tree = DecisionTree::new().max_depth(3);
/// tree.train_uniform(&samples, 1);
///
/// assert_eq!(tree.label(&samples[3]), 1.0);
/// assert_eq!(tree.error(&samples, 1), 0.0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    config: DecisionTreeConfig,
    root: Node,
}


impl DecisionTree {
    /// Construct an untrained tree with the default hyperparameters.
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct an untrained tree from `config`.
    pub fn with_config(config: DecisionTreeConfig) -> Self {
        Self { config, root: Node::default() }
    }


    /// Set the number of histogram bins. Default is `25`.
    pub fn n_bins(mut self, n_bins: usize) -> Self {
        assert!(n_bins > 0, "a histogram needs at least one bin");
        self.config.n_bins = n_bins;
        self
    }


    /// Limit the depth of the tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }


    /// Returns the hyperparameters.
    pub fn config(&self) -> &DecisionTreeConfig {
        &self.config
    }


    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth of the trained tree.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Write the current tree to a dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph weak_learner {\n")?;

        let info = self.root.to_dot_info(0).0;
        info.into_iter()
            .try_for_each(|row| f.write_all(row.as_bytes()))?;

        f.write_all(b"}\n")?;
        Ok(())
    }


    fn grow(
        &self,
        samples: &[&Sample],
        weights: &[f32],
        class_index: usize,
        depth: usize,
    ) -> Node
    {
        let (label, pure) = majority(samples, class_index);
        let mut leaf = LeafNode::new(label);

        let depth_reached = self.config.max_depth
            .is_some_and(|max| depth >= max);
        if pure || depth_reached {
            return Node::Leaf(leaf);
        }


        // Pick the first attribute of maximal gain.
        let base = histogram::entropy(samples, weights, class_index);
        let n_attributes = samples[0].n();
        let mut best = None;
        for attribute in 0..n_attributes {
            let gain = histogram::information_gain(
                samples, weights, class_index,
                attribute, self.config.n_bins, base,
            );
            match best {
                Some((_, g)) if gain <= g => {},
                _ => { best = Some((attribute, gain)); },
            }
        }
        let Some((attribute, _)) = best else {
            return Node::Leaf(leaf);
        };


        let threshold = histogram::split_threshold(
            samples, weights, class_index, attribute
        );
        let rule = Splitter::new(attribute, threshold);


        let mut lsamples = Vec::new();
        let mut lweights = Vec::new();
        let mut rsamples = Vec::new();
        let mut rweights = Vec::new();
        for (&sample, &w) in samples.iter().zip(weights) {
            match rule.split(sample) {
                LR::Left => {
                    lsamples.push(sample);
                    lweights.push(w);
                },
                LR::Right => {
                    rsamples.push(sample);
                    rweights.push(w);
                },
            }
        }


        // If the split has no meaning, construct a leaf node.
        if lsamples.is_empty() || rsamples.is_empty() {
            leaf.rule = rule;
            return Node::Leaf(leaf);
        }


        let left = self.grow(&lsamples, &lweights, class_index, depth + 1);
        let right = self.grow(&rsamples, &rweights, class_index, depth + 1);
        Node::branch(rule, label, left, right)
    }
}


/// Returns the majority label (ties go to `-1`)
/// and whether every sample is on the same side of `class_index`.
fn majority(samples: &[&Sample], class_index: usize) -> (f32, bool) {
    let n_pos = samples.iter()
        .filter(|s| s.y() == class_index)
        .count();
    let n_neg = samples.len() - n_pos;

    let label = if n_pos > n_neg { 1f32 } else { -1f32 };
    (label, n_pos == 0 || n_neg == 0)
}


impl WeakLearner for DecisionTree {
    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let depth = self.config.max_depth
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unlimited".to_string());
        let info = Vec::from([
            ("# of bins", format!("{}", self.config.n_bins)),
            ("Max depth", depth),
        ]);
        Some(info)
    }


    fn train(&mut self, samples: &[Sample], weights: &[f32], class_index: usize) {
        checker::check_weights(samples, weights);
        if samples.is_empty() {
            self.root = Node::default();
            return;
        }

        let samples = samples.iter().collect::<Vec<_>>();
        self.root = self.grow(&samples, weights, class_index, 0);
    }


    #[inline]
    fn label(&self, sample: &Sample) -> f32 {
        self.root.label(sample)
    }


    fn min_attributes(&self) -> usize {
        self.root.min_attributes()
    }


    fn export_internal(&self, params: &mut ParamWriter) {
        self.root.export(params);
    }


    fn import_internal(&mut self, params: &mut ParamReader<'_>) -> Result<()> {
        self.root = Node::import(params)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoostError;

    fn two_blocks() -> Vec<Sample> {
        vec![
            Sample::new(vec![0.0, 3.0], 0),
            Sample::new(vec![0.5, 1.0], 0),
            Sample::new(vec![1.0, 2.0], 0),
            Sample::new(vec![4.0, 2.5], 1),
            Sample::new(vec![4.5, 1.5], 1),
            Sample::new(vec![5.0, 3.0], 1),
        ]
    }


    #[test]
    fn single_class_is_a_single_leaf() {
        let samples = vec![
            Sample::new(vec![0.0, 1.0], 2),
            Sample::new(vec![3.0, 1.0], 2),
        ];
        let mut tree = DecisionTree::new();
        tree.train_uniform(&samples, 2);
        assert_eq!(tree.n_leaves(), 1);
        assert_eq!(tree.label(&samples[0]), 1.0);
        assert_eq!(tree.error(&samples, 2), 0.0);

        tree.train_uniform(&samples, 0);
        assert_eq!(tree.n_leaves(), 1);
        assert_eq!(tree.label(&samples[1]), -1.0);
    }


    #[test]
    fn separates_two_blocks() {
        let samples = two_blocks();
        let mut tree = DecisionTree::new();
        tree.train_uniform(&samples, 1);
        assert_eq!(tree.error(&samples, 1), 0.0);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.n_leaves(), 2);
    }


    #[test]
    fn depth_limit_is_respected() {
        let samples = two_blocks();
        let mut stump = DecisionTree::new().max_depth(0);
        stump.train_uniform(&samples, 1);
        assert_eq!(stump.n_leaves(), 1);
        // Ties go to the negative side.
        assert_eq!(stump.label(&samples[5]), -1.0);
    }


    #[test]
    fn empty_set_leaves_a_zero_leaf() {
        let mut tree = DecisionTree::new();
        tree.train(&[], &[], 0);
        assert_eq!(tree.label(&Sample::new(vec![1.0], 0)), 0.0);
    }


    #[test]
    fn export_then_import_keeps_the_tree() {
        let samples = two_blocks();
        let mut tree = DecisionTree::new();
        tree.train_uniform(&samples, 0);

        let params = tree.export_params();
        let mut copy = DecisionTree::new();
        copy.import_params(&params).unwrap();
        assert_eq!(copy.root(), tree.root());
    }


    #[test]
    fn one_child_node_is_rejected() {
        let mut tree = DecisionTree::new();
        let err = tree.import_params("0,0.5,1,1,0,0,0,1,0,0,").unwrap_err();
        assert!(matches!(err, BoostError::MalformedNode(1, 0)));
    }


    #[test]
    fn reports_the_attributes_it_reads() {
        let samples = two_blocks();
        let mut tree = DecisionTree::new();
        tree.train_uniform(&samples, 1);
        assert_eq!(tree.min_attributes(), 1);

        tree.import_params("5,0.5,1,1,1,0,0,-1,0,0,0,0,1,0,0,").unwrap();
        assert_eq!(tree.min_attributes(), 6);

        // A leaf reads nothing, whatever rule it carries.
        tree.import_params("7,0.5,1,0,0,").unwrap();
        assert_eq!(tree.min_attributes(), 0);
    }


    #[test]
    fn writes_a_dot_file() {
        let samples = two_blocks();
        let mut tree = DecisionTree::new();
        tree.train_uniform(&samples, 1);

        let mut path = std::env::temp_dir();
        path.push("weakboost_dtree_test.dot");
        tree.to_dot_file(&path).unwrap();
        let dot = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(dot.starts_with("graph weak_learner {"));
        assert!(dot.contains("node_0 [ label = \"x[0] >"));
        assert!(dot.contains("node_0 -- node_1"));
        assert!(dot.contains("node_0 -- node_2"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
