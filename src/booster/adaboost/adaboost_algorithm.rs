//! Provides one-vs-rest [`AdaBoost`] by Freund & Schapire, 1995.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::{
    Booster,
    WeakLearner,
    Sample,

    common::{Accumulator, checker, utils},
    error::{BoostError, Result},
    hypothesis::{BoostedClassifier, Ensemble},
    research::TrainingLogger,
    sample::{n_classes, class_count},
    weak_learner::binary_label,
};

use std::ops::ControlFlow;


// Weighted errors are clamped into `[ERROR_FLOOR, 1 - ERROR_FLOOR]`.
const ERROR_FLOOR: f64 = 1e-9;


/// Hyperparameters of [`AdaBoost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaBoostConfig {
    /// Number of weak learners trained per class.
    pub n_weak_learners: usize,
    /// Print a colored report of every round.
    pub verbose: bool,
}


impl Default for AdaBoostConfig {
    fn default() -> Self {
        Self { n_weak_learners: 5, verbose: false }
    }
}


/// Defines one-vs-rest `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// For every class `k` in `0..=max(y)`, `AdaBoost` grows an ensemble
/// of `n_weak_learners` copies of the given weak learner,
/// each trained to tell class `k` from the rest.
/// A round
/// 1. trains a fresh copy on the current sample weights,
/// 2. computes its weighted error `e` (clamped away from `0` and `1`),
/// 3. weights it by `alpha = ln((1 - e) / e)`,
/// 4. multiplies the weight of sample `i` by `exp(-alpha * h(x_i) * y_i)`
///    and renormalizes.
///
/// The weights of class `k` start with half of the mass on its members
/// and half on the rest.
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let samples = SyntheticClusters::new(3)
///     .n_samples(150)
///     .variance(0.05)
///     .seed(0)
///     .generate();
///
/// let f = AdaBoost::init(&samples)
///     .n_weak_learners(3)
///     .run(&LogisticRegression::new())
///     .unwrap();
///
/// assert_eq!(f.n_classes(), 3);
/// assert!(f.error(&samples) < 0.05);
///
/// let (class, confidence) = f.label(&Sample::new(vec![1.0, -1.0, -1.0], 0));
/// assert_eq!(class, 0);
/// assert!(confidence > 0.5);
/// ```
pub struct AdaBoost<'a, L> {
    // Training sample
    samples: &'a [Sample],

    config: AdaBoostConfig,

    n_classes: usize,
    n_attributes: usize,

    // Distribution on the samples for the current class.
    weights: Vec<f32>,

    // Samples misclassified by the latest weak learner.
    mistakes: FixedBitSet,

    // One ensemble per class trained so far.
    ensembles: Vec<Ensemble<L>>,

    logger: Option<TrainingLogger>,
}


impl<'a, L> AdaBoost<'a, L> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    pub fn init(samples: &'a [Sample]) -> Self {
        Self::with_config(samples, AdaBoostConfig::default())
    }


    /// Initialize the `AdaBoost` from `config`.
    pub fn with_config(samples: &'a [Sample], config: AdaBoostConfig) -> Self {
        Self {
            samples,
            config,

            n_classes: 0,
            n_attributes: 0,

            weights: Vec::new(),
            mistakes: FixedBitSet::with_capacity(samples.len()),
            ensembles: Vec::new(),

            logger: None,
        }
    }


    /// Set the number of weak learners per class.
    /// Default is `5`.
    /// `1` trains a single, non-boosted learner per class.
    pub fn n_weak_learners(mut self, n_weak_learners: usize) -> Self {
        assert!(n_weak_learners > 0, "at least one weak learner is required");
        self.config.n_weak_learners = n_weak_learners;
        self
    }


    /// Print a colored report of the run if `true`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }


    /// Returns the hyperparameters.
    pub fn config(&self) -> &AdaBoostConfig {
        &self.config
    }


    /// Returns the current distribution over the samples.
    pub fn distribution(&self) -> &[f32] {
        &self.weights
    }


    fn info(&self) -> Vec<(&str, String)> {
        Vec::from([
            ("# of samples", format!("{}", self.samples.len())),
            ("# of classes", format!("{}", self.n_classes)),
            ("# of weak learners", format!("{}", self.config.n_weak_learners)),
        ])
    }


    /// Multiply each weight by `exp(-alpha * margin)` and renormalize.
    /// The products are formed in log space so that large margins
    /// neither overflow nor flush every weight to zero.
    fn update_weights(&mut self, alpha: f32, margins: &[f32]) {
        self.weights.iter_mut()
            .zip(margins)
            .for_each(|(w, m)| { *w = w.ln() - alpha * m; });

        let max = self.weights.iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);

        self.weights.iter_mut()
            .for_each(|w| { *w = (*w - max).exp(); });
        utils::normalize(&mut self.weights);
    }
}


/// Half of the mass on the members of `class_index`, half on the rest.
/// Uniform if either side is empty.
pub(crate) fn initial_weights(samples: &[Sample], class_index: usize)
    -> Vec<f32>
{
    let n_samples = samples.len();
    let n_pos = class_count(samples, class_index);
    let n_neg = n_samples - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return utils::uniform(n_samples);
    }

    let pos = 1f32 / (2 * n_pos) as f32;
    let neg = 1f32 / (2 * n_neg) as f32;
    samples.iter()
        .map(|s| if s.y() == class_index { pos } else { neg })
        .collect()
}


/// `ln((1 - e) / e)` with `e` clamped away from `0` and `1`.
#[inline]
pub(crate) fn learner_weight(error: f32) -> f32 {
    let e = (error as f64).clamp(ERROR_FLOOR, 1f64 - ERROR_FLOOR);
    ((1f64 - e) / e).ln() as f32
}


impl<L> Booster<L> for AdaBoost<'_, L>
    where L: WeakLearner + Clone,
{
    type Output = BoostedClassifier<L>;


    fn preprocess(&mut self, weak_learner: &L) -> Result<()> {
        if self.config.n_weak_learners == 0 {
            return Err(BoostError::InvalidConfig(
                "at least one weak learner per class is required"
            ));
        }
        self.n_attributes = checker::check_sample(self.samples)?;
        self.n_classes = n_classes(self.samples);

        self.weights = Vec::new();
        self.mistakes = FixedBitSet::with_capacity(self.samples.len());
        self.ensembles = Vec::with_capacity(self.n_classes);

        self.logger = None;
        if self.config.verbose {
            let logger = TrainingLogger::new();
            logger.print_stats("AdaBoost (one-vs-rest)", self.info(), weak_learner);
            logger.print_header();
            self.logger = Some(logger);
        }
        Ok(())
    }


    fn boost(&mut self, weak_learner: &L, iteration: usize)
        -> ControlFlow<usize>
    {
        let n_weak_learners = self.config.n_weak_learners;

        let t = iteration - 1;
        let class_index = t / n_weak_learners;
        let round = t % n_weak_learners;

        if class_index >= self.n_classes {
            return ControlFlow::Break(t);
        }


        // A new class starts from the balanced distribution.
        if round == 0 {
            self.weights = initial_weights(self.samples, class_index);
            self.ensembles.push(Ensemble::with_capacity(n_weak_learners));
        }


        // Get a new weak learner.
        let mut learner = weak_learner.clone();
        learner.train(self.samples, &self.weights, class_index);


        // Each element in `margins` is the product of
        // the learner output and the desired label.
        let margins = self.samples.iter()
            .map(|s| learner.label(s) * binary_label(s.y(), class_index))
            .collect::<Vec<f32>>();

        self.mistakes.clear();
        margins.iter()
            .enumerate()
            .for_each(|(i, m)| { self.mistakes.set(i, *m <= 0f32); });

        let error = self.mistakes.ones()
            .map(|i| self.weights[i])
            .sum::<Accumulator>()
            .total();
        let alpha = learner_weight(error);


        self.update_weights(alpha, &margins);
        checker::check_distribution(&self.weights);


        debug!(
            class = class_index,
            round,
            error,
            alpha,
            mistakes = self.mistakes.count_ones(..),
            "boosting round"
        );
        let last = round + 1 == n_weak_learners;
        if let Some(logger) = &self.logger {
            logger.print_round(class_index, round + 1, last, error, alpha);
        }


        if let Some(ensemble) = self.ensembles.last_mut() {
            ensemble.push(alpha, learner);
        }
        if last {
            info!(class = class_index, n_weak_learners, "class ensemble trained");
        }

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self, _weak_learner: &L) -> Result<Self::Output> {
        let ensembles = std::mem::take(&mut self.ensembles);
        Ok(BoostedClassifier::new(
            self.n_attributes,
            self.config.n_weak_learners,
            ensembles,
        ))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weak_learner::DecisionTree;

    #[test]
    fn initial_weights_balance_the_classes() {
        let samples = vec![
            Sample::new(vec![0.0], 0),
            Sample::new(vec![0.0], 1),
            Sample::new(vec![0.0], 1),
            Sample::new(vec![0.0], 1),
        ];
        let w = initial_weights(&samples, 0);
        assert_eq!(w, vec![0.5, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0]);

        let w = initial_weights(&samples, 2);
        assert_eq!(w, vec![0.25; 4]);
    }


    #[test]
    fn learner_weight_is_finite() {
        assert!(learner_weight(0.0).is_finite());
        assert!(learner_weight(1.0).is_finite());
        assert_eq!(learner_weight(0.5), 0.0);
        assert!(learner_weight(0.1) > 0.0);
        assert!(learner_weight(0.9) < 0.0);
    }


    #[test]
    fn reweighting_survives_huge_margins() {
        let samples = vec![
            Sample::new(vec![0.0], 0),
            Sample::new(vec![0.0], 1),
        ];
        let mut booster = AdaBoost::<DecisionTree>::init(&samples);
        booster.weights = vec![0.5, 0.5];
        booster.update_weights(20.0, &[1e3, -1e3]);
        assert_eq!(booster.distribution().to_vec(), vec![0f32, 1f32]);
    }


    #[test]
    fn empty_sample_is_rejected() {
        let mut booster = AdaBoost::<DecisionTree>::init(&[]);
        let err = booster.run(&DecisionTree::new()).unwrap_err();
        assert!(matches!(err, BoostError::EmptySample));
    }


    #[test]
    fn zero_weak_learners_is_rejected() {
        let samples = vec![
            Sample::new(vec![0.0], 0),
            Sample::new(vec![1.0], 1),
            Sample::new(vec![2.0], 2),
        ];
        let config = AdaBoostConfig { n_weak_learners: 0, verbose: false };
        let err = AdaBoost::with_config(&samples, config)
            .run(&DecisionTree::new())
            .unwrap_err();
        assert!(matches!(err, BoostError::InvalidConfig(_)));
    }
}
