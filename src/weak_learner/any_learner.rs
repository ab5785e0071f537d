use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::error::{BoostError, Result};
use crate::params::{ParamWriter, ParamReader};

use super::core::WeakLearner;
use super::{DecisionTree, NaiveBayes, LogisticRegression, Svm};


use std::fmt;


/// One of the four weak learners, chosen at runtime.
///
/// The exported parameters start with a tag field
/// (`tree`, `bayes`, `logistic` or `svm`),
/// so a boosted model of `AnyWeakLearner` can be imported
/// without knowing the variant in advance.
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let learner = AnyWeakLearner::from(NaiveBayes::new());
/// assert_eq!(learner.tag(), "bayes");
///
/// let learner: AnyWeakLearner = "svm".parse().unwrap();
/// assert_eq!(learner.name(), "Linear SVM (SMO)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyWeakLearner {
    /// [`DecisionTree`]
    DecisionTree(DecisionTree),
    /// [`NaiveBayes`]
    NaiveBayes(NaiveBayes),
    /// [`LogisticRegression`]
    LogisticRegression(LogisticRegression),
    /// [`Svm`]
    Svm(Svm),
}


impl AnyWeakLearner {
    /// Returns the tag written in front of the exported parameters.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DecisionTree(_) => "tree",
            Self::NaiveBayes(_) => "bayes",
            Self::LogisticRegression(_) => "logistic",
            Self::Svm(_) => "svm",
        }
    }


    fn inner(&self) -> &dyn WeakLearner {
        match self {
            Self::DecisionTree(l) => l,
            Self::NaiveBayes(l) => l,
            Self::LogisticRegression(l) => l,
            Self::Svm(l) => l,
        }
    }


    fn inner_mut(&mut self) -> &mut dyn WeakLearner {
        match self {
            Self::DecisionTree(l) => l,
            Self::NaiveBayes(l) => l,
            Self::LogisticRegression(l) => l,
            Self::Svm(l) => l,
        }
    }
}


impl Default for AnyWeakLearner {
    fn default() -> Self {
        Self::DecisionTree(DecisionTree::default())
    }
}


impl std::str::FromStr for AnyWeakLearner {
    type Err = BoostError;

    /// Construct the default learner of the variant named by `tag`.
    fn from_str(tag: &str) -> Result<Self> {
        let learner = match tag.trim() {
            "tree" => Self::DecisionTree(DecisionTree::default()),
            "bayes" => Self::NaiveBayes(NaiveBayes::default()),
            "logistic" => Self::LogisticRegression(LogisticRegression::default()),
            "svm" => Self::Svm(Svm::default()),
            other => return Err(BoostError::UnknownLearner(other.to_string())),
        };
        Ok(learner)
    }
}


impl fmt::Display for AnyWeakLearner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}


impl From<DecisionTree> for AnyWeakLearner {
    fn from(learner: DecisionTree) -> Self {
        Self::DecisionTree(learner)
    }
}


impl From<NaiveBayes> for AnyWeakLearner {
    fn from(learner: NaiveBayes) -> Self {
        Self::NaiveBayes(learner)
    }
}


impl From<LogisticRegression> for AnyWeakLearner {
    fn from(learner: LogisticRegression) -> Self {
        Self::LogisticRegression(learner)
    }
}


impl From<Svm> for AnyWeakLearner {
    fn from(learner: Svm) -> Self {
        Self::Svm(learner)
    }
}


impl WeakLearner for AnyWeakLearner {
    fn name(&self) -> &str {
        self.inner().name()
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        self.inner().info()
    }


    fn train(&mut self, samples: &[Sample], weights: &[f32], class_index: usize) {
        self.inner_mut().train(samples, weights, class_index);
    }


    #[inline]
    fn label(&self, sample: &Sample) -> f32 {
        self.inner().label(sample)
    }


    fn min_attributes(&self) -> usize {
        self.inner().min_attributes()
    }


    fn export_internal(&self, params: &mut ParamWriter) {
        params.field(self.tag());
        self.inner().export_internal(params);
    }


    /// Reads the tag first.
    /// A tag naming another variant replaces `self`
    /// by a default instance of that variant.
    fn import_internal(&mut self, params: &mut ParamReader<'_>) -> Result<()> {
        let tag = params.field::<String>("weak learner tag")?;
        if tag.trim() != self.tag() {
            *self = tag.parse()?;
        }
        self.inner_mut().import_internal(params)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_is_an_error() {
        let mut learner = AnyWeakLearner::default();
        let err = learner.import_params("forest,1,").unwrap_err();
        assert!(matches!(err, BoostError::UnknownLearner(tag) if tag == "forest"));
    }


    #[test]
    fn import_switches_the_variant() {
        let samples = vec![
            Sample::new(vec![-1.0], 0),
            Sample::new(vec![1.0], 1),
        ];
        let mut svm = AnyWeakLearner::from(Svm::new());
        svm.train_uniform(&samples, 1);
        let params = svm.export_params();
        assert!(params.starts_with("svm,"));

        let mut learner = AnyWeakLearner::default();
        learner.import_params(&params).unwrap();
        assert_eq!(learner.tag(), "svm");
        assert_eq!(learner.label(&samples[0]), svm.label(&samples[0]));
    }
}
