/// Defines Gaussian Naive Bayes.
mod nbayes;

/// Defines the per-attribute Gaussian.
mod probability;

pub use nbayes::{NaiveBayes, BayesScore};
pub use probability::{Gaussian, VARIANCE_FLOOR};
