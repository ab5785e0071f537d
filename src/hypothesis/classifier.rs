use rayon::prelude::*;

use crate::Sample;
use crate::common::Accumulator;


/// A trait that defines the behavor of a multi-class classifier.
/// You only need to implement `margins` method.
pub trait Classifier {
    /// Returns the raw margin of every class for `sample`.
    fn margins(&self, sample: &Sample) -> Vec<f32>;


    /// Returns the class of maximal margin and its confidence,
    /// the softmax of the margins at that class.
    /// Ties go to the lowest class index.
    fn label(&self, sample: &Sample) -> (usize, f32) {
        softmax_argmax(&self.margins(sample))
    }


    /// Predicts the class of `sample`.
    fn predict(&self, sample: &Sample) -> usize {
        self.label(sample).0
    }


    /// Predicts the class of every sample.
    fn predict_all(&self, samples: &[Sample]) -> Vec<usize>
        where Self: Sync
    {
        samples.par_iter()
            .map(|sample| self.predict(sample))
            .collect()
    }


    /// Returns the fraction of `samples` whose predicted class
    /// differs from the true one.
    /// An empty set has error `0`.
    fn error(&self, samples: &[Sample]) -> f32
        where Self: Sync
    {
        if samples.is_empty() { return 0f32; }

        let n_errors = samples.par_iter()
            .filter(|sample| self.predict(sample) != sample.y())
            .count();
        n_errors as f32 / samples.len() as f32
    }
}


/// Index of the largest margin and `exp(m_max) / sum_k exp(m_k)`.
/// The maximum is subtracted before exponentiating.
/// No margin at all yields `(0, 0)`.
pub fn softmax_argmax(margins: &[f32]) -> (usize, f32) {
    let Some(&first) = margins.first() else {
        return (0, 0f32);
    };

    let (best, max) = margins.iter()
        .copied()
        .enumerate()
        .skip(1)
        .fold((0, first), |(bi, bm), (i, m)| {
            if m > bm { (i, m) } else { (bi, bm) }
        });

    let denom = margins.iter()
        .map(|m| (m - max).exp())
        .sum::<Accumulator>()
        .total();
    (best, 1f32 / denom)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_picks_the_largest_margin() {
        let (k, conf) = softmax_argmax(&[0.0, 2.0, 1.0]);
        assert_eq!(k, 1);
        let expected = 2f32.exp() / (1.0 + 2f32.exp() + 1f32.exp());
        assert!((conf - expected).abs() < 1e-6);
    }


    #[test]
    fn huge_margins_do_not_overflow() {
        let (k, conf) = softmax_argmax(&[1000.0, 10.0]);
        assert_eq!(k, 0);
        assert_eq!(conf, 1.0);
    }


    #[test]
    fn ties_and_empty() {
        let (k, conf) = softmax_argmax(&[3.0, 3.0]);
        assert_eq!(k, 0);
        assert!((conf - 0.5).abs() < 1e-6);
        assert_eq!(softmax_argmax(&[]), (0, 0.0));
    }
}
