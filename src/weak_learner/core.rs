//! Provides the `WeakLearner` trait.
use crate::Sample;
use crate::common::utils;
use crate::error::Result;
use crate::params::{ParamWriter, ParamReader};


/// A trait that defines the behavior of a weak learner.
///
/// A weak learner is trained one-vs-rest:
/// a sample counts as positive (`+1`) if its label equals `class_index`
/// and as negative (`-1`) otherwise.
/// After training, [`WeakLearner::label`] returns a real-valued score
/// whose sign is the predicted membership.
///
/// # Required Methods
/// - [`WeakLearner::name`]
/// - [`WeakLearner::train`]
/// - [`WeakLearner::label`]
/// - [`WeakLearner::min_attributes`]
/// - [`WeakLearner::export_internal`]
/// - [`WeakLearner::import_internal`]
///
/// # Provided Methods
/// - [`WeakLearner::info`]
/// - [`WeakLearner::train_uniform`]
/// - [`WeakLearner::error`]
/// - [`WeakLearner::export_params`]
/// - [`WeakLearner::import_params`]
pub trait WeakLearner {
    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the hyperparameters as `(name, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fit the parameters for `class_index`
    /// on `samples` weighted by `weights`.
    /// An empty `samples` leaves the learner in its default state.
    fn train(&mut self, samples: &[Sample], weights: &[f32], class_index: usize);


    /// Fit the parameters with uniform weights `1 / N`.
    fn train_uniform(&mut self, samples: &[Sample], class_index: usize) {
        let weights = utils::uniform(samples.len());
        self.train(samples, &weights[..], class_index);
    }


    /// Returns the score of `sample`.
    /// The sign is the predicted membership;
    /// the magnitude depends on the weak learner.
    fn label(&self, sample: &Sample) -> f32;


    /// Returns the number of attributes a sample needs
    /// for [`WeakLearner::label`], i.e., one past the largest
    /// attribute index the fitted parameters read.
    fn min_attributes(&self) -> usize;


    /// Returns the fraction of `samples`
    /// whose predicted membership is wrong.
    /// A zero score counts as an error.
    fn error(&self, samples: &[Sample], class_index: usize) -> f32 {
        if samples.is_empty() { return 0f32; }

        let n_errors = samples.iter()
            .filter(|sample| {
                let desired = binary_label(sample.y(), class_index);
                self.label(sample) * desired <= 0f32
            })
            .count();
        n_errors as f32 / samples.len() as f32
    }


    /// Write the fitted parameters as `,`-terminated fields.
    fn export_internal(&self, params: &mut ParamWriter);


    /// Read the fitted parameters written by
    /// [`WeakLearner::export_internal`], consuming exactly those fields.
    fn import_internal(&mut self, params: &mut ParamReader<'_>) -> Result<()>;


    /// Returns the fitted parameters as text.
    fn export_params(&self) -> String {
        let mut params = ParamWriter::new();
        self.export_internal(&mut params);
        params.into_string()
    }


    /// Restore the parameters from the text returned by
    /// [`WeakLearner::export_params`].
    /// Fails on truncated, malformed, or trailing input.
    fn import_params(&mut self, params: &str) -> Result<()> {
        let mut reader = ParamReader::new(params);
        self.import_internal(&mut reader)?;
        reader.finish()
    }
}


/// Returns `+1` if the two class indices match, `-1` otherwise.
#[inline(always)]
pub fn binary_label(class0: usize, class1: usize) -> f32 {
    if class0 == class1 { 1f32 } else { -1f32 }
}
