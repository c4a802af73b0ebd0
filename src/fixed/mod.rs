// src/fixed/mod.rs
//! Fixed-point sample formats.
//!
//! Butterflies sum in a wider integer so that adding a handful of samples
//! never wraps. Saturation only happens when a result is narrowed back to
//! storage width, or when a coefficient product is rounded.

pub mod types;

pub use types::{Q15, Q31};

use crate::common::{FftNum, Format};
use crate::tables::{TableCache, TwiddleTable};

static Q15_TWIDDLES: TableCache<TwiddleTable<Q15>> = TableCache::new();
static Q31_TWIDDLES: TableCache<TwiddleTable<Q31>> = TableCache::new();

macro_rules! impl_fft_num {
    ($name:ident, $acc:ty, $product:ty, $format:expr, $cache:ident) => {
        impl FftNum for $name {
            type Acc = $acc;

            const FORMAT: Format = $format;

            #[inline]
            fn from_f64(value: f64) -> Self {
                $name::from_f64(value)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                $name::to_f64(self)
            }

            #[inline(always)]
            fn widen(self) -> $acc {
                self.to_bits() as $acc
            }

            #[inline(always)]
            fn narrow(acc: $acc, shift: u32) -> Self {
                if shift == 0 {
                    return $name::saturate(acc);
                }
                // Round half to even, then arithmetic shift.
                let floor = acc >> shift;
                let rem = acc & ((1 << shift) - 1);
                let half: $acc = 1 << (shift - 1);
                let rounded = if rem > half || (rem == half && (floor & 1) == 1) {
                    floor + 1
                } else {
                    floor
                };
                $name::saturate(rounded)
            }

            #[inline(always)]
            fn mul_coef(acc: $acc, coef: Self) -> $acc {
                let product = acc as $product * coef.to_bits() as $product;
                let offset: $product = 1 << ($name::FRAC - 1);
                ((product + offset) >> $name::FRAC) as $acc
            }

            fn twiddle_cache() -> &'static TableCache<TwiddleTable<Self>> {
                &$cache
            }
        }
    };
}

impl_fft_num!(Q15, i32, i64, Format::Q15, Q15_TWIDDLES);
impl_fft_num!(Q31, i64, i128, Format::Q31, Q31_TWIDDLES);
