//! Error types of this crate.
//!
//! Training favors clamping over failing, so most of these variants
//! come from reading data or importing serialized parameters.

use thiserror::Error;

/// Result type alias used throughout `weakboost`.
pub type Result<T> = std::result::Result<T, BoostError>;


/// Errors returned by `weakboost`.
#[derive(Error, Debug)]
pub enum BoostError {
    /// The parameter stream ended (or lost its delimiter)
    /// before the expected field was read.
    #[error("missing parameter `{field}`: no token terminated by `{delim}`")]
    MissingToken {
        /// Name of the field being read.
        field: &'static str,
        /// The delimiter that should have terminated it.
        delim: char,
    },

    /// A token could not be parsed into the expected type.
    #[error("invalid parameter `{field}`: cannot parse {token:?}")]
    InvalidToken {
        /// Name of the field being read.
        field: &'static str,
        /// The raw token.
        token: String,
    },

    /// Parameters were left over after a complete import.
    #[error("{0} trailing bytes left after import")]
    TrailingParams(usize),

    /// The variant tag of an `AnyWeakLearner` blob is unknown.
    #[error("unknown weak learner tag {0:?}")]
    UnknownLearner(String),

    /// A serialized decision tree node declares exactly one child.
    #[error("decision tree node declares children ({0}, {1}), expected none or both")]
    MalformedNode(u8, u8),

    /// A hyperparameter is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A training set without any sample was given.
    #[error("the training sample is empty")]
    EmptySample,

    /// Feature vectors (or weights) have inconsistent lengths.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },

    /// A class label is not a non-negative integer.
    #[error("invalid class label {0:?}")]
    InvalidLabel(String),

    /// IO failure while reading a data file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure inside `polars` while converting a data frame.
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// JSON (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
