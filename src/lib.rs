#![warn(missing_docs)]

//!
//! A crate that provides four weak learners
//! and a one-vs-rest `AdaBoost` that combines them
//! into a multi-class classifier.
//!
//! - Weak learners
//!     Each weak learner is trained to tell one class from the rest
//!     on a weighted training set,
//!     and returns a real-valued score whose sign is the prediction.
//!     This crate provides `DecisionTree`, `NaiveBayes`,
//!     `LogisticRegression`, and `Svm` (linear, trained by SMO).
//!
//!
//! - Boosting
//!     `AdaBoost` grows one weighted ensemble per class.
//!     The resulting `BoostedClassifier` predicts the class
//!     of maximal margin, together with a softmax confidence,
//!     and can be exported to (and imported from) a delimited text format.
//!
//! # Example
//! ```
//! use weakboost::prelude::*;
//!
//! let samples = SyntheticClusters::new(3)
//!     .n_samples(300)
//!     .seed(42)
//!     .generate();
//!
//! let f = AdaBoost::init(&samples)
//!     .n_weak_learners(2)
//!     .run(&DecisionTree::new().max_depth(3))
//!     .unwrap();
//!
//! let params = f.export_params();
//! let g = BoostedClassifier::<DecisionTree>::import_params(&params).unwrap();
//! assert_eq!(f.predict_all(&samples), g.predict_all(&samples));
//! ```

pub mod common;
pub mod error;
pub mod params;
pub mod sample;

pub mod weak_learner;
pub mod hypothesis;
pub mod booster;

pub mod research;

pub mod prelude;


pub use common::Accumulator;
pub use error::{BoostError, Result};
pub use sample::Sample;

pub use weak_learner::{
    WeakLearner,
    AnyWeakLearner,
    DecisionTree,
    NaiveBayes,
    LogisticRegression,
    Svm,
};

pub use hypothesis::{
    Classifier,
    Ensemble,
    BoostedClassifier,
};

pub use booster::{
    Booster,
    AdaBoost,
};

pub use research::{
    CrossValidation,
    TrainingLogger,
};
