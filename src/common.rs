//! Defines some common functions used in this library.

/// Defines the compensated accumulator.
pub mod accumulator;

/// Defines some useful functions such as the dot product.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

pub use accumulator::Accumulator;
