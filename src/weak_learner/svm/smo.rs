//! Sequential Minimal Optimization for the linear soft-margin dual.
use rand::Rng;
use tracing::{trace, warn};

use crate::Sample;
use crate::common::utils::inner_product;
use crate::weak_learner::binary_label;

use super::svm_algorithm::SvmConfig;


// A pair whose second multiplier moves less than this is left untouched.
const MIN_ALPHA_CHANGE: f32 = 1e-5;


/// The state of one SMO run: the multipliers and the hyperplane.
pub(super) struct Smo<'a> {
    samples: &'a [Sample],
    weights: &'a [f32],
    desired: Vec<f32>,
    alpha: Vec<f32>,
    pub(super) w: Vec<f32>,
    pub(super) b: f32,
}


impl<'a> Smo<'a> {
    pub(super) fn new(
        samples: &'a [Sample],
        weights: &'a [f32],
        class_index: usize,
        n_attributes: usize,
    ) -> Self
    {
        let desired = samples.iter()
            .map(|s| binary_label(s.y(), class_index))
            .collect();
        Self {
            samples,
            weights,
            desired,
            alpha: vec![0f32; samples.len()],
            w: vec![0f32; n_attributes],
            b: 0f32,
        }
    }


    #[inline(always)]
    fn margin(&self, sample: &Sample) -> f32 {
        inner_product(&self.w, sample.x()) + self.b
    }


    /// Optimize until `config.clean_passes` consecutive passes
    /// change no multiplier, or `config.max_iter` passes are done.
    pub(super) fn solve<R>(&mut self, config: &SvmConfig, rng: &mut R)
        where R: Rng + ?Sized
    {
        if self.samples.len() < 2 { return; }

        let mut clean_passes = 0;
        let mut passes = 0;
        while clean_passes < config.clean_passes {
            if passes >= config.max_iter {
                warn!(passes, "SMO stopped at the pass limit");
                break;
            }
            passes += 1;

            let n_changed = self.pass(config, rng);
            trace!(pass = passes, n_changed, "SMO pass");

            if n_changed == 0 {
                clean_passes += 1;
            } else {
                clean_passes = 0;
            }
        }
    }


    /// One sweep over the samples. Returns the number of updated pairs.
    fn pass<R>(&mut self, config: &SvmConfig, rng: &mut R) -> usize
        where R: Rng + ?Sized
    {
        let samples = self.samples;
        let n_samples = samples.len();
        let mut n_changed = 0;
        for i in 0..n_samples {
            let slack = config.c * self.weights[i] * n_samples as f32;
            let xi = &samples[i];
            let yi = self.desired[i];
            let a1_old = self.alpha[i];
            let g1 = self.margin(xi);

            if satisfies_kkt(a1_old, yi * g1, slack, config.tolerance) {
                continue;
            }


            // Pick the second multiplier at random.
            let j = loop {
                let j = rng.gen_range(0..n_samples);
                if j != i { break j; }
            };
            let xj = &samples[j];
            let yj = self.desired[j];
            let a2_old = self.alpha[j];
            let g2 = self.margin(xj);


            let (lo, hi) = if yi * yj < 0f32 {
                (
                    0f32.max(a2_old - a1_old),
                    slack.min(slack + a2_old - a1_old),
                )
            } else {
                (
                    0f32.max(a1_old + a2_old - slack),
                    slack.min(a1_old + a2_old),
                )
            };

            let e1 = g1 - yi;
            let e2 = g2 - yj;

            let kii = inner_product(xi.x(), xi.x());
            let kjj = inner_product(xj.x(), xj.x());
            let kij = inner_product(xi.x(), xj.x());
            let eta = 2f32 * kij - kii - kjj;
            if eta == 0f32 { continue; }


            let a2 = (a2_old - yj * (e1 - e2) / eta).min(hi).max(lo);
            if (a2 - a2_old).abs() < MIN_ALPHA_CHANGE { continue; }
            let a1 = a1_old + yi * yj * (a2_old - a2);

            self.alpha[i] = a1;
            self.alpha[j] = a2;
            self.update_normal();


            let b1 = self.b - e1
                - yi * (a1 - a1_old) * kii
                - yj * (a2 - a2_old) * kij;
            let b2 = self.b - e2
                - yi * (a1 - a1_old) * kij
                - yj * (a2 - a2_old) * kjj;

            self.b = if a1 > 0f32 && a1 < slack {
                b1
            } else if a2 > 0f32 && a2 < slack {
                b2
            } else {
                (b1 + b2) / 2f32
            };

            n_changed += 1;
        }
        n_changed
    }


    /// `w = sum_i alpha_i * y_i * x_i`.
    fn update_normal(&mut self) {
        self.w.iter_mut().for_each(|wk| { *wk = 0f32; });

        let iter = self.samples.iter()
            .zip(&self.alpha)
            .zip(&self.desired);
        for ((sample, &a), &y) in iter {
            if a == 0f32 { continue; }
            self.w.iter_mut()
                .zip(sample.x())
                .for_each(|(wk, xk)| { *wk += a * y * xk; });
        }
    }
}


/// KKT conditions of one multiplier, where `yg` is the signed margin.
#[inline]
fn satisfies_kkt(alpha: f32, yg: f32, slack: f32, tolerance: f32) -> bool {
    (alpha == 0f32 && yg >= 1f32)
        || (alpha == slack && yg <= 1f32)
        || (alpha > 0f32 && alpha < slack && (yg - 1f32).abs() < tolerance)
}
