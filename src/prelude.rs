//! Exports the standard boosting algorithm, weak learners, and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,


    // One-vs-rest boosting
    AdaBoost,
    AdaBoostConfig,
};


pub use crate::weak_learner::{
    // Weak learner trait
    WeakLearner,
    binary_label,


    // Decision tree
    DecisionTree,
    DecisionTreeConfig,


    // Naive Bayes
    NaiveBayes,
    BayesScore,


    // Logistic regression
    LogisticRegression,
    LogisticRegressionConfig,


    // Linear SVM
    Svm,
    SvmConfig,


    // Runtime choice
    AnyWeakLearner,
};


pub use crate::hypothesis::{
    Classifier,
    Ensemble,
    BoostedClassifier,
};


pub use crate::sample::{
    Sample,
    SampleReader,
    SyntheticClusters,
    gaussian_blobs,
};


pub use crate::common::Accumulator;


pub use crate::research::{
    CrossValidation,
    TrainingLogger,
};
