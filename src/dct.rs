// src/dct.rs
//! Type-IV discrete cosine transform.
//!
//! `X[k] = normalize * sum x[n] * cos(pi / N * (n + 1/2) * (k + 1/2))`
//!
//! The transform folds the `N` real samples into `N / 2` complex ones,
//! runs the shared complex FFT of that length and unfolds the result. With
//! `normalize = sqrt(2 / N)` the transform is its own inverse.

use alloc::vec::Vec;
use core::f64::consts::PI;

use num_complex::Complex;

use crate::butterfly::{self, load, mul_twiddle};
use crate::common::{Direction, FftError, FftNum, Format};
use crate::plan::ComplexPlan;
use crate::scaling::ScalingSchedule;

/// Lengths a DCT-IV instance can be built for.
pub const DCT4_LENGTHS: [usize; 4] = [128, 512, 2048, 8192];

/// An in-place DCT-IV of fixed length and normalizing factor.
///
/// Floating-point formats return the normalized transform. Fixed-point
/// formats go through the scaled forward FFT and return it divided by
/// `len / 2`, i.e. shifted right by [`Dct4::scaling`]'s total shift.
/// Fixed-point samples must stay within about ±0.7.
#[derive(Debug, Clone)]
pub struct Dct4<T> {
    len: usize,
    normalize: T,
    fft: ComplexPlan<T>,
    fold: Vec<Complex<T>>,
    unfold: Vec<Complex<T>>,
}

impl<T: FftNum> Dct4<T> {
    /// Builds a DCT-IV of `len` points. The usual `normalize` is `sqrt(2 / len)`.
    pub fn new(len: usize, normalize: T) -> Result<Self, FftError> {
        if !DCT4_LENGTHS.contains(&len) {
            return Err(FftError::InvalidLength(len));
        }
        let half = len / 2;
        let fft = ComplexPlan::new(half)?;

        // exp(-i*pi*(4n + 1) / (4N))
        let fold = (0..half)
            .map(|n| unit::<T>(-PI * (4 * n + 1) as f64 / (4 * len) as f64, 1.0))
            .collect();
        // normalize * exp(-i*pi*k / N)
        let scale = normalize.to_f64();
        let unfold = (0..half)
            .map(|k| unit::<T>(-PI * k as f64 / len as f64, scale))
            .collect();

        Ok(Self {
            len,
            normalize,
            fft,
            fold,
            unfold,
        })
    }

    pub fn fft_len(&self) -> usize {
        self.len
    }

    pub fn format(&self) -> Format {
        T::FORMAT
    }

    pub fn normalize(&self) -> T {
        self.normalize
    }

    /// Stage shifts of the inner `len / 2` point transform.
    pub fn scaling(&self) -> &ScalingSchedule {
        self.fft.schedule(Direction::Forward)
    }

    /// Transforms `len` real samples in place, without a length check.
    ///
    /// # Panics
    ///
    /// When `buffer` holds fewer than `len` scalars.
    pub fn transform(&self, buffer: &mut [T]) {
        debug_assert!(buffer.len() >= self.len, "buffer too short for transform");
        let n = self.len;
        let half = n / 2;

        // z[m] = (x[2m] + i x[N-1-2m]) * fold[m]. Slots m and half-1-m read
        // each other's odd samples, so they are rewritten together.
        for m in 0..half / 2 {
            let p = half - 1 - m;
            let (even_m, odd_m) = (buffer[2 * m].widen(), buffer[2 * m + 1].widen());
            let (even_p, odd_p) = (buffer[2 * p].widen(), buffer[2 * p + 1].widen());

            let zm = mul_twiddle::<T>(Complex::new(even_m, odd_p), self.fold[m], false);
            let zp = mul_twiddle::<T>(Complex::new(even_p, odd_m), self.fold[p], false);
            butterfly::store(buffer, m, zm, 0);
            butterfly::store(buffer, p, zp, 0);
        }

        butterfly::execute(&self.fft, buffer, Direction::Forward, true);

        // X[2k] = Re y[k], X[N-1-2k] = -Im y[k], with y[k] = Z[k] * unfold[k].
        for k in 0..half / 2 {
            let p = half - 1 - k;
            let yk = mul_twiddle::<T>(load(buffer, k), self.unfold[k], false);
            let yp = mul_twiddle::<T>(load(buffer, p), self.unfold[p], false);

            buffer[2 * k] = T::narrow(yk.re, 0);
            buffer[2 * k + 1] = T::narrow(-yp.im, 0);
            buffer[2 * p] = T::narrow(yp.re, 0);
            buffer[2 * p + 1] = T::narrow(-yk.im, 0);
        }
    }

    /// Like [`Dct4::transform`], but rejects buffers that are not exactly `len` long.
    pub fn transform_checked(&self, buffer: &mut [T]) -> Result<(), FftError> {
        if buffer.len() != self.len {
            return Err(FftError::SizeMismatch {
                expected: self.len,
                actual: buffer.len(),
            });
        }
        self.transform(buffer);
        Ok(())
    }
}

fn unit<T: FftNum>(angle: f64, scale: f64) -> Complex<T> {
    Complex::new(
        T::from_f64(scale * libm::cos(angle)),
        T::from_f64(scale * libm::sin(angle)),
    )
}

#[cfg(test)]
#[path = "dct_tests.rs"]
mod tests;
