use serde::{Serialize, Deserialize};

use std::ops::Index;


/// A training/test instance:
/// a fixed-length feature vector `x` and its class label `y >= 0`.
/// A `Sample` never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    x: Vec<f32>,
    y: usize,
}


impl Sample {
    /// Construct a new instance of `Sample`.
    pub fn new<T: Into<Vec<f32>>>(x: T, y: usize) -> Self {
        Self { x: x.into(), y }
    }


    /// Returns the feature vector.
    #[inline(always)]
    pub fn x(&self) -> &[f32] {
        &self.x[..]
    }


    /// Returns the number of attributes.
    #[inline(always)]
    pub fn n(&self) -> usize {
        self.x.len()
    }


    /// Returns the class label.
    #[inline(always)]
    pub fn y(&self) -> usize {
        self.y
    }
}


impl Index<usize> for Sample {
    type Output = f32;

    #[inline(always)]
    fn index(&self, i: usize) -> &Self::Output {
        &self.x[i]
    }
}


/// Returns the number of classes, `max(y) + 1`.
/// An empty slice has no class.
pub fn n_classes(samples: &[Sample]) -> usize {
    samples.iter()
        .map(|s| s.y() + 1)
        .max()
        .unwrap_or(0)
}


/// Returns the number of samples labeled `class_index`.
pub fn class_count(samples: &[Sample], class_index: usize) -> usize {
    samples.iter()
        .filter(|s| s.y() == class_index)
        .count()
}
