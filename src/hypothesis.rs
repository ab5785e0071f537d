//! The core library for the hypotheses returned by boosting.

pub(crate) mod classifier;
pub(crate) mod ensemble;
pub(crate) mod boosted_classifier;


pub use classifier::{Classifier, softmax_argmax};
pub use ensemble::Ensemble;
pub use boosted_classifier::BoostedClassifier;
