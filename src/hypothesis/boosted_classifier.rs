use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;

use crate::Sample;
use crate::error::{BoostError, Result};
use crate::params::{ParamWriter, ParamReader, ENSEMBLE_DELIM};
use crate::weak_learner::WeakLearner;

use super::classifier::Classifier;
use super::ensemble::Ensemble;


/// One-vs-rest boosted classifier returned by
/// [`AdaBoost`](crate::booster::AdaBoost).
///
/// It holds one [`Ensemble`] per class.
/// The margin of class `k` is the weighted vote of ensemble `k`,
/// and the predicted class is the one of maximal margin.
///
/// The model round-trips through the delimited text of
/// [`BoostedClassifier::export_params`]:
/// ```text
/// n_weak_learners; n_attributes; n_classes;
/// alpha; <learner fields>; alpha; <learner fields>; ...
/// ```
/// with the ensembles in class order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoostedClassifier<L> {
    n_attributes: usize,
    n_weak_learners: usize,
    ensembles: Vec<Ensemble<L>>,
}


impl<L> BoostedClassifier<L> {
    pub(crate) fn new(
        n_attributes: usize,
        n_weak_learners: usize,
        ensembles: Vec<Ensemble<L>>,
    ) -> Self
    {
        Self { n_attributes, n_weak_learners, ensembles }
    }


    /// Returns the number of classes.
    pub fn n_classes(&self) -> usize {
        self.ensembles.len()
    }


    /// Returns the number of attributes of the training samples.
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }


    /// Returns the number of weak learners per class.
    pub fn n_weak_learners(&self) -> usize {
        self.n_weak_learners
    }


    /// Returns the ensemble of every class.
    pub fn ensembles(&self) -> &[Ensemble<L>] {
        &self.ensembles
    }


    /// Returns the ensemble of `class_index`.
    pub fn ensemble(&self, class_index: usize) -> Option<&Ensemble<L>> {
        self.ensembles.get(class_index)
    }
}


impl<L: WeakLearner> BoostedClassifier<L> {
    /// Returns the model as delimited text.
    pub fn export_params(&self) -> String {
        let mut params = ParamWriter::new();
        params.entry(self.n_weak_learners);
        params.entry(self.n_attributes);
        params.entry(self.n_classes());

        for ensemble in &self.ensembles {
            for (alpha, learner) in ensemble.iter() {
                params.entry(alpha);
                params.entry(learner.export_params());
            }
        }
        params.into_string()
    }
}


impl<L: WeakLearner + Default> BoostedClassifier<L> {
    /// Read a model written by [`BoostedClassifier::export_params`].
    /// Each weak learner starts from `L::default()`.
    /// Fails if a learner reads an attribute
    /// beyond the declared number of attributes.
    pub fn import_params(params: &str) -> Result<Self> {
        let mut reader = ParamReader::new(params);
        let n_weak_learners = reader.entry::<usize>("number of weak learners")?;
        let n_attributes = reader.entry::<usize>("number of attributes")?;

        // Every learner takes two entries, its weight and its blob.
        let width = n_weak_learners.checked_mul(2)
            .ok_or_else(|| BoostError::InvalidToken {
                field: "number of weak learners",
                token: n_weak_learners.to_string(),
            })?;
        let n_classes = reader.length(
            "number of classes", width, ENSEMBLE_DELIM
        )?;
        if n_weak_learners == 0 && n_classes > 0 {
            return Err(BoostError::InvalidToken {
                field: "number of weak learners",
                token: n_weak_learners.to_string(),
            });
        }

        let mut ensembles = Vec::with_capacity(n_classes);
        for _ in 0..n_classes {
            let mut ensemble = Ensemble::with_capacity(n_weak_learners);
            for _ in 0..n_weak_learners {
                let alpha = reader.entry::<f32>("learner weight")?;
                let blob = reader.raw_entry("weak learner")?;

                let mut learner = L::default();
                learner.import_params(blob)?;

                let used = learner.min_attributes();
                if used > n_attributes {
                    return Err(BoostError::DimensionMismatch {
                        expected: n_attributes,
                        actual: used,
                    });
                }
                ensemble.push(alpha, learner);
            }
            ensembles.push(ensemble);
        }
        reader.finish()?;

        Ok(Self { n_attributes, n_weak_learners, ensembles })
    }
}


impl<L: Serialize> BoostedClassifier<L> {
    /// Serialize the model to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}


impl<L: DeserializeOwned> BoostedClassifier<L> {
    /// Deserialize a model written by [`BoostedClassifier::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}


impl<L: WeakLearner> Classifier for BoostedClassifier<L> {
    fn margins(&self, sample: &Sample) -> Vec<f32> {
        self.ensembles.iter()
            .map(|ensemble| ensemble.margin(sample))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weak_learner::{DecisionTree, LogisticRegression, NaiveBayes};

    #[test]
    fn empty_model_labels_class_zero() {
        let f = BoostedClassifier::<LogisticRegression>::new(2, 1, Vec::new());
        let (k, conf) = f.label(&Sample::new(vec![1.0, 2.0], 1));
        assert_eq!((k, conf), (0, 0.0));
        assert_eq!(f.export_params(), "1;2;0;");
    }


    #[test]
    fn handmade_model_round_trips() {
        let text = "1;1;2;0.5;1,2,0,;1.5;1,-2,0,;";
        let f = BoostedClassifier::<LogisticRegression>::import_params(text)
            .unwrap();
        assert_eq!(f.n_classes(), 2);
        assert_eq!(f.export_params(), text);

        assert_eq!(f.predict(&Sample::new(vec![1.0], 0)), 0);
        assert_eq!(f.predict(&Sample::new(vec![-1.0], 1)), 1);
    }


    #[test]
    fn truncated_model_is_rejected() {
        let text = "1;1;2;0.5;1,2,0,;1.5;";
        let err = BoostedClassifier::<LogisticRegression>::import_params(text)
            .unwrap_err();
        assert!(matches!(
            err,
            BoostError::InvalidToken { field: "number of classes", .. }
        ));

        let text = "1;1;1;0.5;1,2,;";
        let err = BoostedClassifier::<LogisticRegression>::import_params(text)
            .unwrap_err();
        assert!(matches!(err, BoostError::MissingToken { field: "bias", .. }));

        let text = "1;1;1;0.5;1,2,0,;junk";
        let err = BoostedClassifier::<LogisticRegression>::import_params(text)
            .unwrap_err();
        assert!(matches!(err, BoostError::TrailingParams(4)));
    }


    #[test]
    fn huge_counts_are_rejected() {
        let texts = [
            format!("1;1;{};", usize::MAX),
            format!("{};1;1;", usize::MAX),
            "0;1;1000000000000;".to_string(),
        ];
        for text in &texts {
            let err = BoostedClassifier::<NaiveBayes>::import_params(text)
                .unwrap_err();
            assert!(matches!(err, BoostError::InvalidToken { .. }), "{text}");
        }
    }


    #[test]
    fn learners_must_fit_the_declared_attributes() {
        let tree = "5,0.5,1,1,1,0,0,-1,0,0,0,0,1,0,0,";
        let text = format!("1;2;1;1;{tree};");
        let err = BoostedClassifier::<DecisionTree>::import_params(&text)
            .unwrap_err();
        assert!(matches!(
            err,
            BoostError::DimensionMismatch { expected: 2, actual: 6 }
        ));

        let text = "1;1;1;0.5;3,1,1,1,0,;";
        let err = BoostedClassifier::<LogisticRegression>::import_params(text)
            .unwrap_err();
        assert!(matches!(
            err,
            BoostError::DimensionMismatch { expected: 1, actual: 3 }
        ));

        let text = format!("1;6;1;1;{tree};");
        let f = BoostedClassifier::<DecisionTree>::import_params(&text).unwrap();
        let ensemble = f.ensemble(0).unwrap();
        assert_eq!(ensemble.len(), 1);
        assert_eq!(ensemble.weights, vec![1.0]);
        assert!(f.ensemble(1).is_none());
    }
}
