use serde::{
    Serialize,
    Deserialize,
};

use crate::Sample;
use crate::common::checker;
use crate::error::Result;
use crate::params::{ParamWriter, ParamReader, WEAK_LEARNER_DELIM};
use crate::weak_learner::WeakLearner;

use super::probability::Gaussian;


use std::fmt;


const POSTERIOR_FLOOR: f64 = 1e-12;
const EVIDENCE_FLOOR: f64 = 1e-9;


/// How [`NaiveBayes`] turns the per-attribute posteriors into a score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BayesScore {
    /// `(lnN - lnP) / (lnP + lnN)`, where `lnP` (`lnN`) is the summed
    /// log posterior of membership (non-membership).
    /// The score lies in `[-1, 1]`.
    #[default]
    NormalizedLogEvidence,


    /// `lnP - lnN`, the log odds of membership. Unbounded.
    LogOdds,
}


impl fmt::Display for BayesScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::NormalizedLogEvidence => "normalized log evidence",
            Self::LogOdds => "log odds",
        };
        write!(f, "{name}")
    }
}


/// Gaussian Naive Bayes.
/// Each attribute is assumed to be an independent Gaussian
/// given the membership of `class_index`.
///
/// Training fits, for every attribute, the weighted mean and variance
/// over the members and over the rest.
/// The variances are floored at `1e-5`.
///
/// For scoring, each attribute yields the posterior of membership
/// normalized between the two Gaussians;
/// the logs of these posteriors are summed and combined by [`BayesScore`].
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let samples = vec![
///     Sample::new(vec![-2.0], 0),
///     Sample::new(vec![-1.5], 0),
///     Sample::new(vec![1.5], 1),
///     Sample::new(vec![2.0], 1),
/// ];
///
/// let mut nb = NaiveBayes::new();
/// nb.train_uniform(&samples, 1);
/// assert!(nb.label(&Sample::new(vec![1.8], 1)) > 0.0);
/// assert!(nb.label(&Sample::new(vec![-1.8], 0)) < 0.0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayes {
    score: BayesScore,
    // Densities of the members of the class.
    positive: Vec<Gaussian>,
    // Densities of the rest.
    negative: Vec<Gaussian>,
}


impl NaiveBayes {
    /// Construct an untrained instance.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the score. Default is [`BayesScore::NormalizedLogEvidence`].
    pub fn score(mut self, score: BayesScore) -> Self {
        self.score = score;
        self
    }


    /// Returns the number of attributes seen in training.
    pub fn n_attributes(&self) -> usize {
        self.positive.len()
    }


    /// Summed log posteriors `(lnP, lnN)` of `sample`.
    pub fn log_evidence(&self, sample: &Sample) -> (f64, f64) {
        let mut ln_p = 0f64;
        let mut ln_n = 0f64;
        let densities = self.positive.iter().zip(&self.negative);
        for (&x, (pos, neg)) in sample.x().iter().zip(densities) {
            let p = pos.kernel(x);
            let n = neg.kernel(x);

            let p = p / (p + n).max(EVIDENCE_FLOOR);
            let n = 1f64 - p;

            ln_p += p.max(POSTERIOR_FLOOR).ln();
            ln_n += n.max(POSTERIOR_FLOOR).ln();
        }
        (ln_p, ln_n)
    }
}


impl WeakLearner for NaiveBayes {
    fn name(&self) -> &str {
        "Gaussian Naive Bayes"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        Some(vec![("Score", self.score.to_string())])
    }


    fn train(&mut self, samples: &[Sample], weights: &[f32], class_index: usize) {
        checker::check_weights(samples, weights);
        self.positive.clear();
        self.negative.clear();

        let Some(first) = samples.first() else { return; };

        for j in 0..first.n() {
            let pos = Gaussian::fit(
                samples, weights, j, |s| s.y() == class_index
            );
            let neg = Gaussian::fit(
                samples, weights, j, |s| s.y() != class_index
            );
            self.positive.push(pos);
            self.negative.push(neg);
        }
    }


    fn label(&self, sample: &Sample) -> f32 {
        let (ln_p, ln_n) = self.log_evidence(sample);
        match self.score {
            BayesScore::NormalizedLogEvidence => {
                let sum = ln_p + ln_n;
                if sum == 0f64 { return 0f32; }
                ((ln_n - ln_p) / sum) as f32
            },
            BayesScore::LogOdds => (ln_p - ln_n) as f32,
        }
    }


    fn min_attributes(&self) -> usize {
        self.n_attributes()
    }


    fn export_internal(&self, params: &mut ParamWriter) {
        params.field(self.n_attributes());
        self.positive.iter()
            .zip(&self.negative)
            .for_each(|(p, n)| {
                params.field(p.mean);
                params.field(n.mean);
            });
        self.positive.iter()
            .zip(&self.negative)
            .for_each(|(p, n)| {
                params.field(p.var);
                params.field(n.var);
            });
    }


    fn import_internal(&mut self, params: &mut ParamReader<'_>) -> Result<()> {
        // Two means and two variances per attribute.
        let n = params.length("number of attributes", 4, WEAK_LEARNER_DELIM)?;
        let means = params.fields::<f32>("mean", 2 * n)?;
        let vars = params.fields::<f32>("variance", 2 * n)?;

        let (positive, negative) = means.chunks_exact(2)
            .zip(vars.chunks_exact(2))
            .map(|(m, v)| {
                let p = Gaussian { mean: m[0], var: v[0] };
                let n = Gaussian { mean: m[1], var: v[1] };
                (p, n)
            })
            .unzip();
        self.positive = positive;
        self.negative = negative;
        Ok(())
    }
}
