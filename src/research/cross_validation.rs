use rand::prelude::*;
use colored::Colorize;
use crate::Sample;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test sample for k-fold cross validation.
/// Fold `i` holds out the `i`-th block of the (optionally shuffled)
/// sample order; the last fold also takes the remainder.
///
/// # Example
/// ```
/// use weakboost::prelude::*;
///
/// let samples = SyntheticClusters::new(2)
///     .n_samples(100)
///     .seed(5)
///     .generate();
/// let cv = CrossValidation::new(&samples)
///     .n_folds(4)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let f = AdaBoost::init(&train)
///         .n_weak_learners(2)
///         .run(&DecisionTree::new().max_depth(2))
///         .unwrap();
///     assert!(f.error(&test) < 0.5);
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    samples: &'a [Sample],
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(samples: &'a [Sample]) -> Self {
        let ix = (0..samples.len()).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            samples,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(
            1 < n_folds && n_folds <= self.samples.len(),
            "the number of folds should be in `[2, N]`"
        );
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Vec<Sample>, Vec<Sample>) {
        let n_samples = self.samples.len();
        let test_size = n_samples / self.n_folds;
        let start = i * test_size;
        let end = if i + 1 == self.n_folds { n_samples } else { start + test_size };

        let mut train = Vec::with_capacity(n_samples - (end - start));
        let mut test = Vec::with_capacity(end - start);
        for (pos, &ix) in self.ix.iter().enumerate() {
            let sample = self.samples[ix].clone();
            if (start..end).contains(&pos) {
                test.push(sample);
            } else {
                train.push(sample);
            }
        }
        (train, test)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Vec<Sample>, Vec<Sample>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.len();
            let test_size = output.1.len();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
