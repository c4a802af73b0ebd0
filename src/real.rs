// src/real.rs

use alloc::sync::Arc;

use num_complex::Complex;

use crate::butterfly::{self, load, mul_twiddle, store, times_i};
use crate::common::{Direction, FftError, FftNum, FftProcess, Format};
use crate::plan::{ComplexPlan, Radices};
use crate::scaling::ScalingSchedule;
use crate::tables::TwiddleTable;

/// Real-input FFT of length `len`, computed with a `len / 2` point complex FFT.
///
/// The spectrum is packed in place into the `len` scalars of the input:
/// `[DC, Nyquist, Re X1, Im X1, ..., Re X(len/2-1), Im X(len/2-1)]`.
/// Bins above `len / 2` are the conjugates of the ones stored.
///
/// Scaling follows [`crate::CplxFft`]: fixed-point formats produce
/// `DFT(x) / len` and [`RealFft::inverse_real`] maps that back to `x`.
/// Fixed-point samples must stay within about ±0.7. The round trip then
/// holds to [`crate::round_trip_tolerance`] at `len` points, which grows
/// with `sqrt(len)` for Q15 and Q31.
#[derive(Debug, Clone)]
pub struct RealFft<T> {
    len: usize,
    half: ComplexPlan<T>,
    recombine: Arc<TwiddleTable<T>>,
}

/// Right shifts of the recombination pass: (bins, DC and Nyquist).
fn forward_shifts(format: Format) -> (u32, u32) {
    if format.is_fixed_point() { (2, 1) } else { (1, 0) }
}

fn inverse_shift(format: Format) -> u32 {
    if format.is_fixed_point() { 0 } else { 1 }
}

impl<T: FftNum> RealFft<T> {
    pub fn new(len: usize) -> Result<Self, FftError> {
        if len % 2 != 0 {
            return Err(FftError::InvalidLength(len));
        }
        let half = ComplexPlan::new(len / 2).map_err(|_| FftError::InvalidLength(len))?;

        Ok(Self {
            len,
            half,
            recombine: TwiddleTable::shared(len),
        })
    }

    pub fn fft_len(&self) -> usize {
        self.len
    }

    pub fn format(&self) -> Format {
        T::FORMAT
    }

    /// Radices of the inner `len / 2` point transform.
    pub fn radices(&self) -> &Radices {
        &self.half.radices
    }

    /// Stage shifts of the inner complex transform.
    pub fn scaling(&self, direction: Direction) -> &ScalingSchedule {
        self.half.schedule(direction)
    }

    /// Forward transform of `len` real samples, without a length check.
    ///
    /// # Panics
    ///
    /// When `buffer` holds fewer than `len` scalars.
    pub fn transform_real(&self, buffer: &mut [T]) {
        debug_assert!(buffer.len() >= self.len, "buffer too short for transform");
        let m = self.len / 2;
        let (shift, edge_shift) = forward_shifts(T::FORMAT);

        // Even samples become the real parts, odd samples the imaginary parts.
        butterfly::execute(&self.half, buffer, Direction::Forward, true);

        let z0 = load(buffer, 0);
        buffer[0] = T::narrow(z0.re + z0.im, edge_shift);
        buffer[1] = T::narrow(z0.re - z0.im, edge_shift);

        for k in 1..=m / 2 {
            let a = load(buffer, k);
            let b = load(buffer, m - k).conj();
            let even = a + b;
            let odd = a - b;
            let tmp = times_i::<T>(mul_twiddle::<T>(odd, self.recombine.get(k), false));

            store(buffer, k, even - tmp, shift);
            store(buffer, m - k, (even + tmp).conj(), shift);
        }
    }

    /// Inverse of [`RealFft::transform_real`], without a length check.
    ///
    /// # Panics
    ///
    /// When `buffer` holds fewer than `len` scalars.
    pub fn inverse_real(&self, buffer: &mut [T]) {
        debug_assert!(buffer.len() >= self.len, "buffer too short for transform");
        let m = self.len / 2;
        let shift = inverse_shift(T::FORMAT);

        let dc = buffer[0].widen();
        let nyquist = buffer[1].widen();
        buffer[0] = T::narrow(dc + nyquist, shift);
        buffer[1] = T::narrow(dc - nyquist, shift);

        for k in 1..=m / 2 {
            let a = load(buffer, k);
            let b = load(buffer, m - k).conj();
            let even = a + b;
            let odd = a - b;
            let tmp = times_i::<T>(mul_twiddle::<T>(odd, self.recombine.get(k), true));

            store(buffer, k, even + tmp, shift);
            store(buffer, m - k, (even - tmp).conj(), shift);
        }

        butterfly::execute(&self.half, buffer, Direction::Inverse, true);
    }

    pub fn transform_real_checked(&self, buffer: &mut [T]) -> Result<(), FftError> {
        self.check_len(buffer.len())?;
        self.transform_real(buffer);
        Ok(())
    }

    pub fn inverse_real_checked(&self, buffer: &mut [T]) -> Result<(), FftError> {
        self.check_len(buffer.len())?;
        self.inverse_real(buffer);
        Ok(())
    }

    fn check_len(&self, actual: usize) -> Result<(), FftError> {
        if actual != self.len {
            return Err(FftError::SizeMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl<T: FftNum> FftProcess<T> for RealFft<T> {
    fn process(&self, buffer: &mut [T], direction: Direction) -> Result<(), FftError> {
        match direction {
            Direction::Forward => self.transform_real_checked(buffer),
            Direction::Inverse => self.inverse_real_checked(buffer),
        }
    }
}

/// Expands a packed real spectrum into all `len` conjugate-symmetric bins.
pub fn unpack_spectrum<T: FftNum>(packed: &[T], spectrum: &mut [Complex<T>]) -> Result<(), FftError> {
    let n = check_packed_len(packed.len(), spectrum.len())?;
    let half = n / 2;
    let zero = T::default();

    spectrum[0] = Complex::new(packed[0], zero);
    spectrum[half] = Complex::new(packed[1], zero);
    for k in 1..half {
        let (re, im) = (packed[2 * k], packed[2 * k + 1]);
        spectrum[k] = Complex::new(re, im);
        spectrum[n - k] = Complex::new(re, T::narrow(-im.widen(), 0));
    }
    Ok(())
}

/// Packs bins `0..=len/2` of a full spectrum; the upper half is ignored.
pub fn pack_spectrum<T: FftNum>(spectrum: &[Complex<T>], packed: &mut [T]) -> Result<(), FftError> {
    let n = check_packed_len(packed.len(), spectrum.len())?;
    let half = n / 2;

    packed[0] = spectrum[0].re;
    packed[1] = spectrum[half].re;
    for k in 1..half {
        packed[2 * k] = spectrum[k].re;
        packed[2 * k + 1] = spectrum[k].im;
    }
    Ok(())
}

fn check_packed_len(packed: usize, spectrum: usize) -> Result<usize, FftError> {
    if packed < 2 || packed % 2 != 0 {
        return Err(FftError::InvalidLength(packed));
    }
    if spectrum != packed {
        return Err(FftError::SizeMismatch {
            expected: packed,
            actual: spectrum,
        });
    }
    Ok(packed)
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
