// src/complex.rs

use core::slice;

use num_complex::Complex;

use crate::butterfly;
use crate::common::{Direction, FftError, FftNum, FftProcess, Format};
use crate::plan::{ComplexPlan, Radices};
use crate::scaling::ScalingSchedule;
use crate::tables::{BitReversalTable, TwiddleTable};

/// An in-place complex FFT of fixed length, format and direction.
///
/// Buffers are interleaved `[re0, im0, re1, im1, ...]` and hold `2 * len`
/// scalars. The tables are shared with every other instance of the same
/// length and format, so construction after the first is cheap.
///
/// Fixed-point formats return `DFT(x) / len` from the forward transform
/// and the plain inverse DFT from the inverse one. Floating-point formats
/// return the plain DFT forward and `IDFT / len` inverse.
#[derive(Debug, Clone)]
pub struct CplxFft<T> {
    plan: ComplexPlan<T>,
    direction: Direction,
    bit_reverse: bool,
}

impl<T: FftNum> CplxFft<T> {
    /// Binds the tables for `len`.
    ///
    /// With `bit_reverse` unset the spectrum is left in digit-reversed order;
    /// see [`CplxFft::bit_reversal`] for the mapping.
    pub fn new(len: usize, direction: Direction, bit_reverse: bool) -> Result<Self, FftError> {
        Ok(Self {
            plan: ComplexPlan::new(len)?,
            direction,
            bit_reverse,
        })
    }

    pub fn fft_len(&self) -> usize {
        self.plan.len
    }

    pub fn format(&self) -> Format {
        T::FORMAT
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn bit_reverse(&self) -> bool {
        self.bit_reverse
    }

    pub fn radices(&self) -> &Radices {
        &self.plan.radices
    }

    pub fn scaling(&self) -> &ScalingSchedule {
        self.plan.schedule(self.direction)
    }

    pub fn twiddles(&self) -> &TwiddleTable<T> {
        &self.plan.twiddles
    }

    pub fn bit_reversal(&self) -> &BitReversalTable {
        &self.plan.bitrev
    }

    /// Transforms `buffer` in place without checking its length.
    ///
    /// Only the first `2 * len` scalars are touched.
    ///
    /// # Panics
    ///
    /// When `buffer` holds fewer than `2 * len` scalars.
    #[inline]
    pub fn transform(&self, buffer: &mut [T]) {
        debug_assert!(buffer.len() >= 2 * self.plan.len, "buffer too short for transform");
        butterfly::execute(&self.plan, buffer, self.direction, self.bit_reverse);
    }

    /// Like [`CplxFft::transform`], but rejects buffers that are not exactly `2 * len` long.
    pub fn transform_checked(&self, buffer: &mut [T]) -> Result<(), FftError> {
        self.check_len(buffer.len())?;
        self.transform(buffer);
        Ok(())
    }

    /// Transforms a slice of complex samples in place.
    ///
    /// # Panics
    ///
    /// When `buffer` holds fewer than `len` samples.
    pub fn transform_complex(&self, buffer: &mut [Complex<T>]) {
        // SAFETY: Complex<T> is #[repr(C)] with `re` then `im`, so a slice of
        // n complex values has the layout of 2n scalars of T.
        let scalars =
            unsafe { slice::from_raw_parts_mut(buffer.as_mut_ptr() as *mut T, 2 * buffer.len()) };
        self.transform(scalars);
    }

    /// Applies the output permutation to a buffer produced with `bit_reverse` unset.
    ///
    /// The permutation is its own inverse, so this also turns a natural-order
    /// spectrum into transform-native order.
    pub fn reorder(&self, buffer: &mut [T]) {
        self.plan.bitrev.apply(&mut buffer[..2 * self.plan.len]);
    }

    fn check_len(&self, actual: usize) -> Result<(), FftError> {
        let expected = 2 * self.plan.len;
        if actual != expected {
            return Err(FftError::SizeMismatch { expected, actual });
        }
        Ok(())
    }
}

/// Runs in the requested direction. The instance's own direction is ignored;
/// both scaling schedules are bound at construction.
impl<T: FftNum> FftProcess<T> for CplxFft<T> {
    fn process(&self, buffer: &mut [T], direction: Direction) -> Result<(), FftError> {
        self.check_len(buffer.len())?;
        butterfly::execute(&self.plan, buffer, direction, self.bit_reverse);
        Ok(())
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
