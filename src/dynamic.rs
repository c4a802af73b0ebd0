// src/dynamic.rs
//! Transforms whose format is picked at runtime.
//!
//! The typed [`CplxFft`] and [`RealFft`] are the fast path. The wrappers
//! here take a [`Format`] tag at construction and a tagged buffer per call,
//! and reject buffers of another format.

use half::f16;

use crate::common::{Direction, FftError, Format};
use crate::complex::CplxFft;
use crate::fixed::{Q15, Q31};
use crate::real::RealFft;

/// A mutable sample buffer tagged with its format.
#[derive(Debug)]
pub enum SampleBufferMut<'a> {
    F16(&'a mut [f16]),
    F32(&'a mut [f32]),
    F64(&'a mut [f64]),
    Q15(&'a mut [Q15]),
    Q31(&'a mut [Q31]),
}

impl SampleBufferMut<'_> {
    pub fn format(&self) -> Format {
        match self {
            SampleBufferMut::F16(_) => Format::F16,
            SampleBufferMut::F32(_) => Format::F32,
            SampleBufferMut::F64(_) => Format::F64,
            SampleBufferMut::Q15(_) => Format::Q15,
            SampleBufferMut::Q31(_) => Format::Q31,
        }
    }

    /// Number of scalars.
    pub fn len(&self) -> usize {
        match self {
            SampleBufferMut::F16(data) => data.len(),
            SampleBufferMut::F32(data) => data.len(),
            SampleBufferMut::F64(data) => data.len(),
            SampleBufferMut::Q15(data) => data.len(),
            SampleBufferMut::Q31(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_slice {
    ($($variant:ident => $ty:ty),*) => {
        $(
            impl<'a> From<&'a mut [$ty]> for SampleBufferMut<'a> {
                fn from(data: &'a mut [$ty]) -> Self {
                    SampleBufferMut::$variant(data)
                }
            }
        )*
    };
}

impl_from_slice!(F16 => f16, F32 => f32, F64 => f64, Q15 => Q15, Q31 => Q31);

/// Pairs a transform with a buffer of the same format, or reports the mismatch.
macro_rules! dispatch {
    ($fft:expr, $buffer:expr, |$inner:ident, $data:ident| $body:expr) => {
        match ($fft, $buffer) {
            (Self::F16($inner), SampleBufferMut::F16($data)) => $body,
            (Self::F32($inner), SampleBufferMut::F32($data)) => $body,
            (Self::F64($inner), SampleBufferMut::F64($data)) => $body,
            (Self::Q15($inner), SampleBufferMut::Q15($data)) => $body,
            (Self::Q31($inner), SampleBufferMut::Q31($data)) => $body,
            (fft, buffer) => Err(FftError::FormatMismatch {
                expected: fft.format(),
                actual: buffer.format(),
            }),
        }
    };
}

/// Complex transform over a runtime-selected format.
#[derive(Debug, Clone)]
pub enum AnyCplxFft {
    F16(CplxFft<f16>),
    F32(CplxFft<f32>),
    F64(CplxFft<f64>),
    Q15(CplxFft<Q15>),
    Q31(CplxFft<Q31>),
}

impl AnyCplxFft {
    pub fn new(
        len: usize,
        format: Format,
        direction: Direction,
        bit_reverse: bool,
    ) -> Result<Self, FftError> {
        Ok(match format {
            Format::F16 => Self::F16(CplxFft::new(len, direction, bit_reverse)?),
            Format::F32 => Self::F32(CplxFft::new(len, direction, bit_reverse)?),
            Format::F64 => Self::F64(CplxFft::new(len, direction, bit_reverse)?),
            Format::Q15 => Self::Q15(CplxFft::new(len, direction, bit_reverse)?),
            Format::Q31 => Self::Q31(CplxFft::new(len, direction, bit_reverse)?),
        })
    }

    pub fn format(&self) -> Format {
        match self {
            Self::F16(_) => Format::F16,
            Self::F32(_) => Format::F32,
            Self::F64(_) => Format::F64,
            Self::Q15(_) => Format::Q15,
            Self::Q31(_) => Format::Q31,
        }
    }

    pub fn fft_len(&self) -> usize {
        match self {
            Self::F16(fft) => fft.fft_len(),
            Self::F32(fft) => fft.fft_len(),
            Self::F64(fft) => fft.fft_len(),
            Self::Q15(fft) => fft.fft_len(),
            Self::Q31(fft) => fft.fft_len(),
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::F16(fft) => fft.direction(),
            Self::F32(fft) => fft.direction(),
            Self::F64(fft) => fft.direction(),
            Self::Q15(fft) => fft.direction(),
            Self::Q31(fft) => fft.direction(),
        }
    }

    /// Transforms `2 * len` interleaved scalars in place.
    pub fn transform<'a>(&self, buffer: impl Into<SampleBufferMut<'a>>) -> Result<(), FftError> {
        dispatch!(self, buffer.into(), |fft, data| fft.transform_checked(data))
    }
}

/// Real transform over a runtime-selected format.
#[derive(Debug, Clone)]
pub enum AnyRealFft {
    F16(RealFft<f16>),
    F32(RealFft<f32>),
    F64(RealFft<f64>),
    Q15(RealFft<Q15>),
    Q31(RealFft<Q31>),
}

impl AnyRealFft {
    pub fn new(len: usize, format: Format) -> Result<Self, FftError> {
        Ok(match format {
            Format::F16 => Self::F16(RealFft::new(len)?),
            Format::F32 => Self::F32(RealFft::new(len)?),
            Format::F64 => Self::F64(RealFft::new(len)?),
            Format::Q15 => Self::Q15(RealFft::new(len)?),
            Format::Q31 => Self::Q31(RealFft::new(len)?),
        })
    }

    pub fn format(&self) -> Format {
        match self {
            Self::F16(_) => Format::F16,
            Self::F32(_) => Format::F32,
            Self::F64(_) => Format::F64,
            Self::Q15(_) => Format::Q15,
            Self::Q31(_) => Format::Q31,
        }
    }

    pub fn fft_len(&self) -> usize {
        match self {
            Self::F16(fft) => fft.fft_len(),
            Self::F32(fft) => fft.fft_len(),
            Self::F64(fft) => fft.fft_len(),
            Self::Q15(fft) => fft.fft_len(),
            Self::Q31(fft) => fft.fft_len(),
        }
    }

    pub fn transform_real<'a>(&self, buffer: impl Into<SampleBufferMut<'a>>) -> Result<(), FftError> {
        dispatch!(self, buffer.into(), |fft, data| fft.transform_real_checked(data))
    }

    pub fn inverse_real<'a>(&self, buffer: impl Into<SampleBufferMut<'a>>) -> Result<(), FftError> {
        dispatch!(self, buffer.into(), |fft, data| fft.inverse_real_checked(data))
    }
}
