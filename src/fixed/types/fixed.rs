// src/fixed/types/fixed.rs

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

macro_rules! fixed_point {
    ($(#[$doc:meta])* $name:ident, $bits:ty, $wide:ty, $frac:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name($bits);

        impl $name {
            /// Number of fractional bits.
            pub const FRAC: u32 = $frac;
            /// Most negative value, exactly -1.0.
            pub const MIN: Self = Self(<$bits>::MIN);
            /// Largest value, one LSB below 1.0.
            pub const MAX: Self = Self(<$bits>::MAX);
            pub const ZERO: Self = Self(0);

            /// Creates a value from its raw two's complement bits.
            #[inline]
            pub const fn from_bits(bits: $bits) -> Self {
                Self(bits)
            }

            #[inline]
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Converts to fixed point, rounding to nearest and saturating
            /// outside `[-1.0, 1.0)`.
            pub fn from_f64(value: f64) -> Self {
                let scaling_factor = (1u64 << $frac) as f64;
                // Float to integer casts saturate; NaN becomes zero.
                Self(libm::round(value * scaling_factor) as $bits)
            }

            #[inline]
            pub fn to_f64(self) -> f64 {
                self.0 as f64 / (1u64 << $frac) as f64
            }

            /// Saturates a wide intermediate to the storage range.
            #[inline(always)]
            pub(crate) fn saturate(wide: $wide) -> Self {
                Self(wide.clamp(<$bits>::MIN as $wide, <$bits>::MAX as $wide) as $bits)
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0.saturating_add(rhs.0))
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0.saturating_sub(rhs.0))
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(self.0.saturating_neg())
            }
        }

        impl Mul for $name {
            type Output = Self;

            /// Fractional product, rounded to nearest. `MIN * MIN` saturates to `MAX`.
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                let product = self.0 as $wide * rhs.0 as $wide;
                let offset: $wide = 1 << ($frac - 1);
                Self::saturate((product + offset) >> $frac)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.6}", self.to_f64())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Both the decimal value and the raw bits.
                write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
            }
        }
    };
}

fixed_point!(
    /// Signed 1.15 fixed-point sample stored in an `i16`.
    Q15, i16, i32, 15
);

fixed_point!(
    /// Signed 1.31 fixed-point sample stored in an `i32`.
    Q31, i32, i64, 31
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_sum_same_scale() {
        let a = Q15::from_f64(0.25);
        let b = Q15::from_f64(0.125);
        assert_eq!((a + b).to_bits(), Q15::from_f64(0.375).to_bits());
    }

    #[test]
    fn test_sum_saturates() {
        let a = Q15::from_f64(0.75);
        assert_eq!(a + a, Q15::MAX);
        assert_eq!(-a - a, Q15::MIN);
        assert_eq!(-Q31::MIN, Q31::MAX);
    }

    #[test]
    fn test_multiplication_with_rounding() {
        // 0.5 * 0.5 = 0.25
        let a = Q31::from_bits(1 << 30);
        assert_eq!((a * a).to_bits(), 1 << 29);

        // 3 LSB * 0.5 = 1.5 LSB, rounds up to 2.
        let b = Q15::from_bits(3);
        assert_eq!((b * Q15::from_bits(1 << 14)).to_bits(), 2);
    }

    #[test]
    fn test_min_times_min_saturates() {
        assert_eq!(Q15::MIN * Q15::MIN, Q15::MAX);
        assert_eq!(Q31::MIN * Q31::MIN, Q31::MAX);
    }

    #[test]
    fn test_debug_display() {
        let val = Q31::from_bits(1 << 30);
        assert_eq!(format!("{}", val), "0.500000");
        assert_eq!(format!("{:?}", Q15::from_bits(-16384)), "-0.500000 (raw: -16384)");
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Q31::from_f64(0.5).to_bits(), 1 << 30);
        assert_eq!(Q15::from_f64(-0.25).to_bits(), -(1 << 13));

        // Out of range values saturate.
        assert_eq!(Q15::from_f64(1.0), Q15::MAX);
        assert_eq!(Q31::from_f64(-3.0), Q31::MIN);

        // Rounding
        let third = Q15::from_f64(1.0 / 3.0);
        assert!((third.to_f64() - 1.0 / 3.0).abs() <= 0.5 / 32768.0);
    }
}
