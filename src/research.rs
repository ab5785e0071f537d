//! This directory provides some features for research:
//! a console report of a boosting run and k-fold cross validation.

/// Defines the console report used by `AdaBoost::verbose`.
pub mod logger;

/// Defines k-fold cross validation.
pub mod cross_validation;

pub use logger::TrainingLogger;
pub use cross_validation::CrossValidation;
