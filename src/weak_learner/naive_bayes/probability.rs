use serde::{
    Serialize,
    Deserialize,
};

use crate::Sample;
use crate::common::Accumulator;


/// Lower bound of a fitted variance.
pub const VARIANCE_FLOOR: f32 = 1e-5;

const WEIGHT_FLOOR: f32 = 1e-9;


/// One-dimensional Gaussian fitted on a weighted attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    pub(super) mean: f32,
    pub(super) var: f32,
}


impl Gaussian {
    /// Weighted mean and variance of `attribute`
    /// over the samples accepted by `filter`.
    pub(super) fn fit<F>(
        samples: &[Sample],
        weights: &[f32],
        attribute: usize,
        filter: F,
    ) -> Self
        where F: Fn(&Sample) -> bool
    {
        let mut weight_sum = Accumulator::new();
        let mut mean = Accumulator::new();
        for (sample, &w) in samples.iter().zip(weights) {
            if filter(sample) {
                mean += w * sample[attribute];
                weight_sum += w;
            }
        }
        let weight_sum = weight_sum.total().max(WEIGHT_FLOOR);
        let mean = mean.total() / weight_sum;


        let mut var = Accumulator::new();
        for (sample, &w) in samples.iter().zip(weights) {
            if filter(sample) {
                var += w * (sample[attribute] - mean).powi(2);
            }
        }
        let var = (var.total() / weight_sum).max(VARIANCE_FLOOR);

        Self { mean, var }
    }


    /// The unnormalized density `exp(-(x - mean)^2 / (2 var))`.
    #[inline(always)]
    pub(super) fn kernel(&self, x: f32) -> f64 {
        let d = x as f64 - self.mean as f64;
        (-d.powi(2) / (2f64 * self.var as f64)).exp()
    }
}
