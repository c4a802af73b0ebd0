// src/common.rs

use core::fmt;
use core::ops::Neg;

use num_traits::Num;

use crate::tables::{TableCache, TwiddleTable};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// The length is not in the supported set for the requested format.
    InvalidLength(usize),
    /// A checked entry point got a buffer of the wrong number of scalars.
    SizeMismatch { expected: usize, actual: usize },
    /// A tagged buffer does not match the format the instance was built for.
    FormatMismatch { expected: Format, actual: Format },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidLength(len) => {
                write!(f, "Transform length {} is not supported for this format", len)
            }
            FftError::SizeMismatch { expected, actual } => write!(
                f,
                "Data buffer holds {} scalars but the transform needs {}",
                actual, expected
            ),
            FftError::FormatMismatch { expected, actual } => write!(
                f,
                "Buffer format {} does not match transform format {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    #[inline]
    pub fn is_inverse(self) -> bool {
        matches!(self, Direction::Inverse)
    }
}

/// Numeric formats a transform can be bound to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Format {
    F16,
    F32,
    F64,
    /// Signed 1.15 fixed point.
    Q15,
    /// Signed 1.31 fixed point.
    Q31,
}

impl Format {
    pub fn is_fixed_point(self) -> bool {
        matches!(self, Format::Q15 | Format::Q31)
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::F16 => "f16",
            Format::F32 => "f32",
            Format::F64 => "f64",
            Format::Q15 => "q15",
            Format::Q31 => "q31",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar arithmetic the butterfly network needs from a sample format.
///
/// Butterflies add in `Acc`, which is wide enough that sums of a few
/// samples never overflow. A result is brought back to storage width with
/// [`FftNum::narrow`], which is the only place rounding and saturation
/// happen besides coefficient products.
pub trait FftNum: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    type Acc: Num + Copy + Neg<Output = Self::Acc> + fmt::Debug;

    const FORMAT: Format;

    /// Rounds to nearest, saturating for fixed-point formats.
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;

    fn widen(self) -> Self::Acc;

    /// Scales `acc` down by `2^shift`, rounds and saturates to storage width.
    fn narrow(acc: Self::Acc, shift: u32) -> Self;

    /// `acc * coef`, computed at double width and rounded back to `Acc`.
    fn mul_coef(acc: Self::Acc, coef: Self) -> Self::Acc;

    /// Process-wide twiddle tables for this format.
    fn twiddle_cache() -> &'static TableCache<TwiddleTable<Self>>;
}

/// Checked processing entry point shared by the complex and real transforms.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], direction: Direction) -> Result<(), FftError>;
}
