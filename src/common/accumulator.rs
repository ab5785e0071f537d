//! Compensated (Kahan) summation over `f32`.
use serde::{Serialize, Deserialize};

use std::iter::Sum;
use std::ops::{AddAssign, SubAssign};


/// A running sum that carries the rounding error
/// lost by each addition and feeds it back into the next one.
/// The error of the total stays bounded
/// no matter how many terms are folded in.
///
/// # Example
/// ```
/// use weakboost::Accumulator;
///
/// let mut acc = Accumulator::from(1f32);
/// for _ in 0..1_000_000 {
///     acc += 1e-8;
/// }
/// assert!((acc.total() - 1.01).abs() < 1e-4);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    sum: f32,
    residual: f32,
}


impl Accumulator {
    /// Construct a zero accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { sum: 0f32, residual: 0f32 }
    }


    /// Reset to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.sum = 0f32;
        self.residual = 0f32;
    }


    /// Fold `value` into the sum.
    #[inline]
    pub fn add(&mut self, value: f32) {
        let y = value - self.residual;
        let t = self.sum + y;
        self.residual = (t - self.sum) - y;
        self.sum = t;
    }


    /// Fold `-value` into the sum.
    #[inline]
    pub fn subtract(&mut self, value: f32) {
        self.add(-value);
    }


    /// Returns the current estimate of the total.
    #[inline]
    pub fn total(&self) -> f32 {
        self.sum
    }
}


impl From<f32> for Accumulator {
    #[inline]
    fn from(value: f32) -> Self {
        Self { sum: value, residual: 0f32 }
    }
}


impl AddAssign<f32> for Accumulator {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        Accumulator::add(self, rhs);
    }
}


impl SubAssign<f32> for Accumulator {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        self.subtract(rhs);
    }
}


impl Sum<f32> for Accumulator {
    fn sum<I: Iterator<Item = f32>>(iter: I) -> Self {
        iter.fold(Accumulator::new(), |mut acc, v| {
            acc += v;
            acc
        })
    }
}


impl<'a> Sum<&'a f32> for Accumulator {
    fn sum<I: Iterator<Item = &'a f32>>(iter: I) -> Self {
        iter.copied().sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_naive_summation() {
        let n = 1_000_000;
        let small = 1e-8_f32;

        let mut naive = 1f32;
        let mut acc = Accumulator::from(1f32);
        for _ in 0..n {
            naive += small;
            acc += small;
        }

        let exact = 1f64 + n as f64 * small as f64;
        let naive_err = (naive as f64 - exact).abs();
        let acc_err = (acc.total() as f64 - exact).abs();
        assert!(acc_err < 1e-4, "compensated error {acc_err}");
        assert!(naive_err > 5e-3, "naive error {naive_err}");
    }


    #[test]
    fn alternating_magnitudes() {
        let mut naive = 0f32;
        let mut acc = Accumulator::new();
        for i in 0..200_000 {
            let v = if i % 2 == 0 { 1e4_f32 } else { 1e-3_f32 };
            naive += v;
            acc.add(v);
        }
        let exact = 100_000f64 * 1e4 + 100_000f64 * 1e-3_f32 as f64;
        let naive_err = (naive as f64 - exact).abs();
        let acc_err = (acc.total() as f64 - exact).abs();
        assert!(acc_err < naive_err, "{acc_err} !< {naive_err}");
    }


    #[test]
    fn subtract_and_clear() {
        let mut acc: Accumulator = [1.5f32, 2.5, 4.0].iter().sum();
        assert_eq!(acc.total(), 8.0);
        acc -= 3.0;
        acc.subtract(1.0);
        assert_eq!(acc.total(), 4.0);

        let copy = acc;
        acc.clear();
        assert_eq!(acc.total(), 0.0);
        assert_eq!(copy.total(), 4.0);
    }
}
