use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::Sample;
use crate::common::{Accumulator, checker, utils};
use crate::error::Result;
use crate::params::{ParamWriter, ParamReader, WEAK_LEARNER_DELIM};
use crate::weak_learner::WeakLearner;


// Smoothing inside the cross entropy `log`.
const LOG_EPSILON: f32 = 1e-9;
const WEIGHT_FLOOR: f32 = 1e-9;


/// Hyperparameters of [`LogisticRegression`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionConfig {
    /// Base learning rate.
    pub learning_rate: f32,
    /// Maximal number of full-batch epochs.
    pub max_epochs: usize,
    /// Decay of the running mean square of the gradient.
    pub decay: f32,
    /// Added to the root mean square before dividing.
    pub epsilon: f32,
    /// Training stops once the mean absolute gradient is below this value.
    pub tolerance: f32,
}


impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_epochs: 100,
            decay: 0.9,
            epsilon: 1e-5,
            tolerance: 1e-3,
        }
    }
}


/// Logistic regression `sigmoid(w·x + b)`.
///
/// Minimizes the weighted cross entropy against the target
/// `1` (member of `class_index`) or `0` (the rest)
/// by full-batch gradient descent.
/// Each parameter has its own step size:
/// the base learning rate divided by the root of
/// an exponential running mean of its squared gradient (RMSprop).
/// Every reduction over the samples is compensated.
///
/// The score is `2 * sigmoid(w·x + b) - 1`, which lies in `[-1, 1]`.
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let samples = gaussian_blobs(&[vec![-2.0, -2.0], vec![2.0, 2.0]], 20, 0.3, 0);
///
/// let mut lr = LogisticRegression::new()
///     .learning_rate(0.1)
///     .max_epochs(100);
/// lr.train_uniform(&samples, 1);
/// assert!(lr.error(&samples, 1) < 0.05);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    config: LogisticRegressionConfig,
    w: Vec<f32>,
    b: f32,
}


impl LogisticRegression {
    /// Construct an untrained instance with the default hyperparameters.
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct an untrained instance from `config`.
    pub fn with_config(config: LogisticRegressionConfig) -> Self {
        Self { config, ..Self::default() }
    }


    /// Set the base learning rate. Default is `0.1`.
    pub fn learning_rate(mut self, learning_rate: f32) -> Self {
        assert!(learning_rate > 0f32);
        self.config.learning_rate = learning_rate;
        self
    }


    /// Set the maximal number of epochs. Default is `100`.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.config.max_epochs = max_epochs;
        self
    }


    /// Set the decay of the running mean square. Default is `0.9`.
    pub fn decay(mut self, decay: f32) -> Self {
        assert!((0f32..1f32).contains(&decay));
        self.config.decay = decay;
        self
    }


    /// Set the stopping threshold on the mean absolute gradient.
    /// Default is `1e-3`.
    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.config.tolerance = tolerance;
        self
    }


    /// Returns the hyperparameters.
    pub fn config(&self) -> &LogisticRegressionConfig {
        &self.config
    }


    /// Returns the weight vector.
    pub fn weights(&self) -> &[f32] {
        &self.w
    }


    /// Returns the bias.
    pub fn bias(&self) -> f32 {
        self.b
    }


    /// Membership probability `sigmoid(w·x + b)`.
    #[inline]
    pub fn probability(&self, sample: &Sample) -> f32 {
        utils::sigmoid(utils::inner_product(&self.w, sample.x()) + self.b)
    }
}


impl WeakLearner for LogisticRegression {
    fn name(&self) -> &str {
        "Logistic Regression"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Learning rate", format!("{}", self.config.learning_rate)),
            ("Max epochs", format!("{}", self.config.max_epochs)),
            ("RMS decay", format!("{}", self.config.decay)),
            ("Tolerance", format!("{}", self.config.tolerance)),
        ]);
        Some(info)
    }


    fn train(&mut self, samples: &[Sample], weights: &[f32], class_index: usize) {
        checker::check_weights(samples, weights);
        self.w.clear();
        self.b = 0f32;

        let Some(first) = samples.first() else { return; };
        let n = first.n();
        self.w = vec![0f32; n];

        let LogisticRegressionConfig {
            learning_rate, max_epochs, decay, epsilon, tolerance,
        } = self.config;

        let mut w_rms = vec![0f32; n];
        let mut b_rms = 0f32;

        for epoch in 0..max_epochs {
            let mut cost = Accumulator::new();
            let mut dw = vec![Accumulator::new(); n];
            let mut db = Accumulator::new();
            let mut d_sum = Accumulator::new();
            let mut weight_sum = Accumulator::new();

            for (sample, &weight) in samples.iter().zip(weights) {
                let sig = self.probability(sample);
                let y = if sample.y() == class_index { 1f32 } else { 0f32 };

                cost += -(y * (sig + LOG_EPSILON).ln()
                    + (1f32 - y) * (1f32 - sig + LOG_EPSILON).ln());
                weight_sum += weight;

                let residual = weight * (sig - y);
                for (dwj, &xj) in dw.iter_mut().zip(sample.x()) {
                    let d = residual * xj;
                    d_sum += d.abs();
                    *dwj += d;
                }
                db += residual;
                d_sum += residual.abs();
            }

            let weight_sum = weight_sum.total().max(WEIGHT_FLOOR);
            let mean_gradient = d_sum.total() / weight_sum / (n + 1) as f32;


            for ((wj, rms), dwj) in self.w.iter_mut().zip(&mut w_rms).zip(&dw) {
                let g = dwj.total() / weight_sum;
                *rms = decay * *rms + (1f32 - decay) * g * g;
                *wj -= learning_rate * g / (rms.sqrt() + epsilon);
            }
            let g = db.total() / weight_sum;
            b_rms = decay * b_rms + (1f32 - decay) * g * g;
            self.b -= learning_rate * g / (b_rms.sqrt() + epsilon);


            trace!(
                epoch,
                cost = cost.total(),
                mean_gradient,
                "logistic regression epoch"
            );
            if mean_gradient < tolerance {
                break;
            }
        }
    }


    #[inline]
    fn label(&self, sample: &Sample) -> f32 {
        2f32 * self.probability(sample) - 1f32
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
        let n = params.length("number of weights", 1, WEAK_LEARNER_DELIM)?;
        self.w = params.fields("weight", n)?;
        self.b = params.field("bias")?;
        Ok(())
    }
}
