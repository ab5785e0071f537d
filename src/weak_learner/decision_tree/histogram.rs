//! Weighted entropy and the binned information gain
//! used to pick the splitting attribute.
use crate::Sample;


/// Default number of histogram bins per attribute.
pub const DEFAULT_N_BINS: usize = 25;


// Floors keeping `log2` and the divisions finite.
const PROB_FLOOR: f64 = 1e-12;
const MASS_FLOOR: f64 = 1e-9;
const RANGE_FLOOR: f64 = 1e-6;


/// Weighted class histogram of one attribute.
/// Each sample spreads its weight over the two nearest bins
/// by linear interpolation.
#[derive(Debug, Clone)]
pub(super) struct Histogram {
    positive: Vec<f64>,
    negative: Vec<f64>,
}


impl Histogram {
    /// Build the histogram of `attribute` over `samples`.
    /// Bin edges are linear between the attribute's minimum and maximum
    /// over the given subset.
    pub(super) fn build(
        samples: &[&Sample],
        weights: &[f32],
        class_index: usize,
        attribute: usize,
        n_bins: usize,
    ) -> Self
    {
        let n_bins = n_bins.max(1);
        let mut positive = vec![0f64; n_bins];
        let mut negative = vec![0f64; n_bins];

        let (min, max) = samples.iter()
            .map(|s| s[attribute] as f64)
            .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let range = (max - min).max(RANGE_FLOOR);
        let scale = (n_bins - 1) as f64;

        for (sample, &w) in samples.iter().zip(weights) {
            let pos = scale * (sample[attribute] as f64 - min) / range;
            let pos = pos.clamp(0f64, scale);
            let bin = pos.floor() as usize;
            let r = pos - bin as f64;

            let hist = if sample.y() == class_index {
                &mut positive
            } else {
                &mut negative
            };

            let w = w as f64;
            hist[bin] += w * (1f64 - r);
            if bin + 1 < n_bins {
                hist[bin + 1] += w * r;
            }
        }

        Self { positive, negative }
    }


    /// Weighted entropy of the class label given the bin.
    pub(super) fn conditional_entropy(&self) -> f64 {
        let total = self.positive.iter()
            .chain(self.negative.iter())
            .sum::<f64>()
            .max(MASS_FLOOR);

        self.positive.iter()
            .zip(&self.negative)
            .map(|(&p, &n)| {
                let mass = p + n;
                if mass <= 0f64 { return 0f64; }
                (mass / total) * binary_entropy(p / mass.max(MASS_FLOOR))
            })
            .sum::<f64>()
    }
}


/// Entropy in bits of a Bernoulli variable with success probability `p`.
#[inline]
fn binary_entropy(p: f64) -> f64 {
    let n = 1f64 - p;
    -p * p.max(PROB_FLOOR).log2() - n * n.max(PROB_FLOOR).log2()
}


/// Weighted entropy of the membership of `class_index` over `samples`.
pub(super) fn entropy(
    samples: &[&Sample],
    weights: &[f32],
    class_index: usize,
) -> f64
{
    let (pos, total) = samples.iter()
        .zip(weights)
        .fold((0f64, 0f64), |(pos, total), (s, &w)| {
            let w = w as f64;
            if s.y() == class_index { (pos + w, total + w) } else { (pos, total + w) }
        });

    binary_entropy(pos / total.max(MASS_FLOOR))
}


/// Information gain of splitting on `attribute`,
/// given the entropy of the whole subset.
pub(super) fn information_gain(
    samples: &[&Sample],
    weights: &[f32],
    class_index: usize,
    attribute: usize,
    n_bins: usize,
    base_entropy: f64,
) -> f64
{
    let hist = Histogram::build(
        samples, weights, class_index, attribute, n_bins
    );
    base_entropy - hist.conditional_entropy()
}


/// Midpoint between the weighted mean of `attribute`
/// over the members of `class_index` and over the rest.
pub(super) fn split_threshold(
    samples: &[&Sample],
    weights: &[f32],
    class_index: usize,
    attribute: usize,
) -> f32
{
    let mut pos = (0f64, 0f64);
    let mut neg = (0f64, 0f64);
    for (sample, &w) in samples.iter().zip(weights) {
        let w = w as f64;
        let v = sample[attribute] as f64;
        let acc = if sample.y() == class_index { &mut pos } else { &mut neg };
        acc.0 += w * v;
        acc.1 += w;
    }

    let pos_mean = pos.0 / pos.1.max(MASS_FLOOR);
    let neg_mean = neg.0 / neg.1.max(MASS_FLOOR);
    ((pos_mean + neg_mean) / 2f64) as f32
}
