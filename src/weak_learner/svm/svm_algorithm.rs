use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::common::{checker, utils};
use crate::error::Result;
use crate::params::{ParamWriter, ParamReader, WEAK_LEARNER_DELIM};
use crate::weak_learner::WeakLearner;

use super::smo::Smo;


/// Hyperparameters of [`Svm`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvmConfig {
    /// Soft-margin penalty.
    /// The bound of multiplier `i` is `c * weights[i] * N`.
    pub c: f32,
    /// Tolerance of the on-margin KKT condition.
    pub tolerance: f32,
    /// Training stops after this many consecutive passes
    /// without any multiplier change.
    pub clean_passes: usize,
    /// Hard limit on the number of passes.
    pub max_iter: usize,
    /// Seed of the generator picking the second multiplier.
    pub seed: u64,
}


impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            c: 0.05,
            tolerance: 0.01,
            clean_passes: 10,
            max_iter: 10_000,
            seed: 0,
        }
    }
}


/// Linear soft-margin SVM trained by
/// Sequential Minimal Optimization (SMO).
///
/// The score is `w·x + b`, unbounded.
///
/// [`WeakLearner::train`] draws the random second multiplier
/// from a generator seeded by [`SvmConfig::seed`],
/// so training is reproducible.
/// Use [`Svm::train_with_rng`] to inject another generator.
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let samples = gaussian_blobs(&[vec![-3.0, -3.0], vec![3.0, 3.0]], 10, 0.2, 0);
///
/// let mut svm = Svm::new().c(0.05).seed(7);
/// svm.train_uniform(&samples, 1);
/// assert_eq!(svm.error(&samples, 1), 0.0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Svm {
    config: SvmConfig,
    w: Vec<f32>,
    b: f32,
}


impl Svm {
    /// Construct an untrained instance with the default hyperparameters.
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct an untrained instance from `config`.
    pub fn with_config(config: SvmConfig) -> Self {
        Self { config, ..Self::default() }
    }


    /// Set the soft-margin penalty. Default is `0.05`.
    pub fn c(mut self, c: f32) -> Self {
        assert!(c > 0f32, "the penalty must be positive");
        self.config.c = c;
        self
    }


    /// Set the KKT tolerance. Default is `0.01`.
    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.config.tolerance = tolerance;
        self
    }


    /// Set the number of clean passes that ends training. Default is `10`.
    pub fn clean_passes(mut self, clean_passes: usize) -> Self {
        self.config.clean_passes = clean_passes;
        self
    }


    /// Set the limit on the number of passes. Default is `10_000`.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter;
        self
    }


    /// Set the seed used by [`WeakLearner::train`].
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }


    /// Returns the hyperparameters.
    pub fn config(&self) -> &SvmConfig {
        &self.config
    }


    /// Returns the normal of the hyperplane.
    pub fn normal(&self) -> &[f32] {
        &self.w
    }


    /// Returns the bias of the hyperplane.
    pub fn bias(&self) -> f32 {
        self.b
    }


    /// Train with the second multiplier drawn from `rng`.
    pub fn train_with_rng<R>(
        &mut self,
        samples: &[Sample],
        weights: &[f32],
        class_index: usize,
        rng: &mut R,
    )
        where R: Rng + ?Sized
    {
        checker::check_weights(samples, weights);
        self.w.clear();
        self.b = 0f32;

        let Some(first) = samples.first() else { return; };

        let mut smo = Smo::new(samples, weights, class_index, first.n());
        smo.solve(&self.config, rng);

        self.w = smo.w;
        self.b = smo.b;
    }
}


impl WeakLearner for Svm {
    fn name(&self) -> &str {
        "Linear SVM (SMO)"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("C", format!("{}", self.config.c)),
            ("KKT tolerance", format!("{}", self.config.tolerance)),
            ("Clean passes", format!("{}", self.config.clean_passes)),
            ("Max passes", format!("{}", self.config.max_iter)),
            ("Seed", format!("{}", self.config.seed)),
        ]);
        Some(info)
    }


    fn train(&mut self, samples: &[Sample], weights: &[f32], class_index: usize) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.train_with_rng(samples, weights, class_index, &mut rng);
    }


    #[inline]
    fn label(&self, sample: &Sample) -> f32 {
        utils::inner_product(&self.w, sample.x()) + self.b
    }


    fn min_attributes(&self) -> usize {
        self.w.len()
    }


    fn export_internal(&self, params: &mut ParamWriter) {
        params.field(self.w.len());
        params.fields(&self.w);
        params.field(self.b);
    }


    fn import_internal(&mut self, params: &mut ParamReader<'_>) -> Result<()> {
        let n = params.length("hyperplane size", 1, WEAK_LEARNER_DELIM)?;
        self.w = params.fields("hyperplane normal", n)?;
        self.b = params.field("hyperplane bias")?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::gaussian_blobs;

    fn separable() -> Vec<Sample> {
        gaussian_blobs(&[vec![-5.0, -5.0], vec![5.0, 5.0]], 15, 0.3, 11)
    }


    #[test]
    fn separates_linearly_separable_data() {
        let samples = separable();
        let mut svm = Svm::new();
        svm.train_uniform(&samples, 1);
        assert_eq!(svm.error(&samples, 1), 0.0);
        assert!(svm.normal().iter().all(|w| *w > 0.0));
    }


    #[test]
    fn same_seed_same_hyperplane() {
        let samples = separable();
        let mut a = Svm::new().seed(3);
        let mut b = Svm::new().seed(3);
        a.train_uniform(&samples, 0);
        b.train_uniform(&samples, 0);
        assert_eq!(a, b);

        let mut rng = StdRng::seed_from_u64(3);
        let mut c = Svm::new().seed(3);
        let weights = utils::uniform(samples.len());
        c.train_with_rng(&samples, &weights, 0, &mut rng);
        assert_eq!(a, c);
    }


    #[test]
    fn too_few_samples_leave_the_zero_plane() {
        let samples = vec![Sample::new(vec![1.0, 2.0], 0)];
        let mut svm = Svm::new();
        svm.train_uniform(&samples, 0);
        assert_eq!(svm.normal().len(), 2);
        assert!(svm.normal().iter().all(|w| *w == 0.0));
        assert_eq!(svm.bias(), 0.0);
        assert_eq!(svm.error(&samples, 0), 1.0);
    }
}
