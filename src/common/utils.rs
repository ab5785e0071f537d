//! This file provides some common numeric functions
//! shared by the weak learners.
use super::accumulator::Accumulator;


/// Dot product of two feature vectors.
/// Extra entries of the longer slice are ignored.
#[inline(always)]
pub fn inner_product(v1: &[f32], v2: &[f32]) -> f32 {
    v1.iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f32>()
}


/// The logistic function `1 / (1 + e^{-z})`.
#[inline(always)]
pub fn sigmoid(z: f32) -> f32 {
    1f32 / (1f32 + (-z).exp())
}


/// Uniform weights `1 / n`.
#[inline(always)]
pub(crate) fn uniform(n: usize) -> Vec<f32> {
    if n == 0 { return Vec::new(); }
    vec![1f32 / n as f32; n]
}


/// Scale `weights` to sum to one.
/// The sum is compensated; an all-zero vector is left untouched.
#[inline]
pub(crate) fn normalize(weights: &mut [f32]) {
    let total = weights.iter().sum::<Accumulator>().total();
    if total > 0f32 {
        weights.iter_mut().for_each(|w| { *w /= total; });
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_sigmoid() {
        assert_eq!(inner_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
    }


    #[test]
    fn normalized_weights_sum_to_one() {
        let mut w = vec![1.0, 3.0];
        normalize(&mut w);
        assert_eq!(w, vec![0.25, 0.75]);

        let mut zeros = vec![0.0; 3];
        normalize(&mut zeros);
        assert_eq!(zeros, vec![0.0; 3]);
        assert_eq!(uniform(4), vec![0.25; 4]);
    }
}
