use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::common::Accumulator;
use crate::weak_learner::WeakLearner;


/// The weighted majority vote of the weak learners of one class.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ensemble<L> {
    /// Weight `alpha` of each learner in `self.learners`.
    pub weights: Vec<f32>,
    /// Trained weak learners.
    pub learners: Vec<L>,
}


impl<L> Default for Ensemble<L> {
    fn default() -> Self {
        Self { weights: Vec::new(), learners: Vec::new() }
    }
}


impl<L> Ensemble<L> {
    /// Construct an empty ensemble.
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct an empty ensemble with room for `capacity` learners.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            learners: Vec::with_capacity(capacity),
        }
    }


    /// Append a pair `(alpha, learner)`.
    #[inline]
    pub fn push(&mut self, alpha: f32, learner: L) {
        self.weights.push(alpha);
        self.learners.push(learner);
    }


    /// Returns the number of learners.
    pub fn len(&self) -> usize {
        self.learners.len()
    }


    /// Returns `true` if no learner has been appended.
    pub fn is_empty(&self) -> bool {
        self.learners.is_empty()
    }


    /// Iterate over the pairs `(alpha, learner)`.
    pub fn iter(&self) -> impl Iterator<Item = (f32, &L)> + '_ {
        self.weights.iter().copied().zip(&self.learners)
    }
}


impl<L: WeakLearner> Ensemble<L> {
    /// Returns `sum_t alpha_t * h_t(sample)`.
    pub fn margin(&self, sample: &Sample) -> f32 {
        self.iter()
            .map(|(alpha, h)| alpha * h.label(sample))
            .sum::<Accumulator>()
            .total()
    }
}
