//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines Decision Tree.
pub mod decision_tree;

/// Defines Gaussian Naive Bayes.
pub mod naive_bayes;

/// Defines Logistic Regression.
pub mod logistic_regression;

/// Defines linear SVM.
pub mod svm;

/// A runtime choice among the weak learners.
pub mod any_learner;


pub use self::core::{WeakLearner, binary_label};

pub use self::decision_tree::{
    DecisionTree,
    DecisionTreeConfig,
};

pub use self::naive_bayes::{
    NaiveBayes,
    BayesScore,
};

pub use self::logistic_regression::{
    LogisticRegression,
    LogisticRegressionConfig,
};

pub use self::svm::{
    Svm,
    SvmConfig,
};

pub use self::any_learner::AnyWeakLearner;
