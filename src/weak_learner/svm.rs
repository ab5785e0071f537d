/// Defines the linear SVM weak learner.
mod svm_algorithm;

/// Defines the SMO solver.
mod smo;

pub use svm_algorithm::{Svm, SvmConfig};
