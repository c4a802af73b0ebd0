// src/float/mod.rs
//! Floating-point sample formats.
//!
//! Floating formats never shift between stages, so `narrow` is a plain
//! conversion for them. `f16` samples are summed in `f32` and rounded once
//! per stage on store.

use half::f16;

use crate::common::{FftNum, Format};
use crate::tables::{TableCache, TwiddleTable};

static F16_TWIDDLES: TableCache<TwiddleTable<f16>> = TableCache::new();
static F32_TWIDDLES: TableCache<TwiddleTable<f32>> = TableCache::new();
static F64_TWIDDLES: TableCache<TwiddleTable<f64>> = TableCache::new();

#[inline(always)]
fn pow2_neg_f32(shift: u32) -> f32 {
    1.0 / (1u64 << shift) as f32
}

impl FftNum for f16 {
    type Acc = f32;

    const FORMAT: Format = Format::F16;

    #[inline]
    fn from_f64(value: f64) -> Self {
        f16::from_f64(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline(always)]
    fn widen(self) -> f32 {
        self.to_f32()
    }

    #[inline(always)]
    fn narrow(acc: f32, shift: u32) -> Self {
        if shift == 0 {
            f16::from_f32(acc)
        } else {
            f16::from_f32(acc * pow2_neg_f32(shift))
        }
    }

    #[inline(always)]
    fn mul_coef(acc: f32, coef: Self) -> f32 {
        acc * coef.to_f32()
    }

    fn twiddle_cache() -> &'static TableCache<TwiddleTable<Self>> {
        &F16_TWIDDLES
    }
}

impl FftNum for f32 {
    type Acc = f32;

    const FORMAT: Format = Format::F32;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn widen(self) -> f32 {
        self
    }

    #[inline(always)]
    fn narrow(acc: f32, shift: u32) -> Self {
        if shift == 0 {
            acc
        } else {
            acc * pow2_neg_f32(shift)
        }
    }

    #[inline(always)]
    fn mul_coef(acc: f32, coef: Self) -> f32 {
        acc * coef
    }

    fn twiddle_cache() -> &'static TableCache<TwiddleTable<Self>> {
        &F32_TWIDDLES
    }
}

impl FftNum for f64 {
    type Acc = f64;

    const FORMAT: Format = Format::F64;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }

    #[inline(always)]
    fn narrow(acc: f64, shift: u32) -> Self {
        if shift == 0 {
            acc
        } else {
            acc / (1u64 << shift) as f64
        }
    }

    #[inline(always)]
    fn mul_coef(acc: f64, coef: Self) -> f64 {
        acc * coef
    }

    fn twiddle_cache() -> &'static TableCache<TwiddleTable<Self>> {
        &F64_TWIDDLES
    }
}
