//! Synthetic multi-class training sets.
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use super::sample_struct::Sample;


/// Generates noisy one-hot clusters.
///
/// A sample of class `c` has `n_classes` attributes;
/// attribute `c` is centered at `+1`, every other one at `-1`,
/// and each is perturbed by zero-mean Gaussian noise.
/// Classes are drawn uniformly.
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let samples = SyntheticClusters::new(3)
///     .n_samples(90)
///     .variance(0.05)
///     .seed(1)
///     .generate();
/// assert_eq!(samples.len(), 90);
/// assert!(samples.iter().all(|s| s.n() == 3 && s.y() < 3));
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticClusters {
    n_classes: usize,
    n_samples: usize,
    variance: f32,
    seed: u64,
}


impl SyntheticClusters {
    /// Construct a generator for `n_classes` classes.
    pub fn new(n_classes: usize) -> Self {
        assert!(n_classes > 0, "at least one class is required");
        Self {
            n_classes,
            n_samples: 1_000,
            variance: 0.125,
            seed: 0,
        }
    }


    /// Set the number of generated samples.
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }


    /// Set the variance of the attribute noise.
    pub fn variance(mut self, variance: f32) -> Self {
        assert!(variance >= 0f32);
        self.variance = variance;
        self
    }


    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Draw the samples.
    pub fn generate(&self) -> Vec<Sample> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let noise = Normal::new(0f32, self.variance.sqrt())
            .expect("standard deviation is finite and non-negative");

        (0..self.n_samples).map(|_| {
                let y = rng.gen_range(0..self.n_classes);
                let x = (0..self.n_classes).map(|j| {
                        let center = if j == y { 1f32 } else { -1f32 };
                        center + noise.sample(&mut rng)
                    })
                    .collect::<Vec<f32>>();
                Sample::new(x, y)
            })
            .collect()
    }
}


/// Generates `n_per_class` samples around each center,
/// labeling the samples around `centers[k]` with class `k`.
/// Each attribute gets independent Gaussian noise of deviation `sd`.
pub fn gaussian_blobs(
    centers: &[Vec<f32>],
    n_per_class: usize,
    sd: f32,
    seed: u64,
) -> Vec<Sample>
{
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0f32, sd)
        .expect("standard deviation is finite and non-negative");

    let mut samples = Vec::with_capacity(centers.len() * n_per_class);
    for _ in 0..n_per_class {
        for (k, center) in centers.iter().enumerate() {
            let x = center.iter()
                .map(|c| c + noise.sample(&mut rng))
                .collect::<Vec<f32>>();
            samples.push(Sample::new(x, k));
        }
    }
    samples
}
