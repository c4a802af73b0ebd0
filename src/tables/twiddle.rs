// src/tables/twiddle.rs

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::PI;

use num_complex::Complex;

use crate::common::FftNum;
use crate::plan::Radices;

/// Rotation factors `W_len^k = exp(-2*pi*i*k/len)` for the leading `k`.
///
/// Only as many factors are kept as the butterflies of `len` and the real
/// recombination at `len` ever read.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable<T> {
    len: usize,
    coefs: Vec<Complex<T>>,
}

impl<T: FftNum> TwiddleTable<T> {
    /// Table for `len`, shared with every other instance of the same format and length.
    pub fn shared(len: usize) -> Arc<Self> {
        T::twiddle_cache().get_or_insert_with(len, || Self::build(len, coefficient_count(len)))
    }

    pub(crate) fn build(len: usize, count: usize) -> Self {
        let mut coefs = Vec::with_capacity(count);
        precompute_twiddles::<T>(&mut coefs, len, count);
        Self { len, coefs }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn coefs(&self) -> &[Complex<T>] {
        &self.coefs
    }

    #[inline(always)]
    pub(crate) fn get(&self, k: usize) -> Complex<T> {
        self.coefs[k]
    }
}

/// Complex stages read up to the plan's count; the real recombination at
/// `len` reads `k` in `0..=len/4`.
fn coefficient_count(len: usize) -> usize {
    let complex = Radices::for_length(len)
        .map(|radices| radices.twiddle_count(len))
        .unwrap_or(0);
    complex.max(len / 4 + 1)
}

fn precompute_twiddles<T: FftNum>(coefs: &mut Vec<Complex<T>>, len: usize, count: usize) {
    for k in 0..count {
        let angle = -2.0 * PI * (k as f64) / (len as f64);
        let (sin, cos) = sin_cos(angle);
        coefs.push(Complex::new(T::from_f64(cos), T::from_f64(sin)));
    }
}

fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return libm::sincos(angle);
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
