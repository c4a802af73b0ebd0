// src/butterfly.rs
//! Decimation-in-frequency butterfly network.
//!
//! Input is read in natural order and every stage works in place, so the
//! spectrum comes out in digit-reversed order. The permutation pass at the
//! end is optional.
//!
//! Samples are widened to `T::Acc` on load, combined there, and narrowed
//! with the stage shift on store.

use num_complex::Complex;

use crate::common::{Direction, FftNum};
use crate::plan::{ComplexPlan, Radix};
use crate::tables::TwiddleTable;

type Wide<T> = Complex<<T as FftNum>::Acc>;

#[derive(Clone, Copy)]
struct Stage {
    span: usize,
    step: usize,
    stride: usize,
    shift: u32,
    inverse: bool,
}

/// Runs every stage of `plan` over the interleaved buffer `[re0, im0, ...]`.
///
/// The buffer must hold at least `2 * plan.len` scalars; indexing panics otherwise.
pub(crate) fn execute<T: FftNum>(
    plan: &ComplexPlan<T>,
    buffer: &mut [T],
    direction: Direction,
    bit_reverse: bool,
) {
    let n = plan.len;
    let schedule = plan.schedule(direction);
    let twiddles = &*plan.twiddles;

    let mut span = n;
    for (index, radix) in plan.radices.as_slice().iter().enumerate() {
        let step = span / radix.size();
        let stage = Stage {
            span,
            step,
            stride: n / span,
            shift: schedule.stage_shift(index),
            inverse: direction.is_inverse(),
        };

        match radix {
            Radix::Two => radix_2(buffer, twiddles, n, stage),
            Radix::Three => radix_3(buffer, twiddles, n, stage),
            Radix::Four => radix_4(buffer, twiddles, n, stage),
            Radix::Five => radix_5(buffer, twiddles, n, stage),
        }
        span = step;
    }

    if bit_reverse {
        plan.bitrev.apply(&mut buffer[..2 * n]);
    }

    if schedule.normalizes() {
        let scale = T::from_f64(1.0 / n as f64);
        for sample in &mut buffer[..2 * n] {
            *sample = T::narrow(T::mul_coef(sample.widen(), scale), 0);
        }
    }
}

fn radix_2<T: FftNum>(buffer: &mut [T], twiddles: &TwiddleTable<T>, n: usize, stage: Stage) {
    for base in (0..n).step_by(stage.span) {
        for j in 0..stage.step {
            let i0 = base + j;
            let i1 = i0 + stage.step;

            let a = load(buffer, i0);
            let b = load(buffer, i1);

            let y0 = a + b;
            let y1 = rotate(a - b, twiddles, j * stage.stride, stage.inverse);

            store(buffer, i0, y0, stage.shift);
            store(buffer, i1, y1, stage.shift);
        }
    }
}

fn radix_4<T: FftNum>(buffer: &mut [T], twiddles: &TwiddleTable<T>, n: usize, stage: Stage) {
    let step = stage.step;
    for base in (0..n).step_by(stage.span) {
        for j in 0..step {
            let i0 = base + j;
            let (i1, i2, i3) = (i0 + step, i0 + 2 * step, i0 + 3 * step);

            let a = load(buffer, i0);
            let b = load(buffer, i1);
            let c = load(buffer, i2);
            let d = load(buffer, i3);

            let t0 = a + c;
            let t1 = a - c;
            let t2 = b + d;
            let t3 = rotate_90::<T>(b - d, stage.inverse);

            let k = j * stage.stride;
            let y0 = t0 + t2;
            let y1 = rotate(t1 + t3, twiddles, k, stage.inverse);
            let y2 = rotate(t0 - t2, twiddles, 2 * k, stage.inverse);
            let y3 = rotate(t1 - t3, twiddles, 3 * k, stage.inverse);

            store(buffer, i0, y0, stage.shift);
            store(buffer, i1, y1, stage.shift);
            store(buffer, i2, y2, stage.shift);
            store(buffer, i3, y3, stage.shift);
        }
    }
}

fn radix_3<T: FftNum>(buffer: &mut [T], twiddles: &TwiddleTable<T>, n: usize, stage: Stage) {
    // W_3 = (c1, s1)
    let w3 = twiddles.get(n / 3);
    let step = stage.step;

    for base in (0..n).step_by(stage.span) {
        for j in 0..step {
            let i0 = base + j;
            let (i1, i2) = (i0 + step, i0 + 2 * step);

            let a = load(buffer, i0);
            let b = load(buffer, i1);
            let c = load(buffer, i2);

            let sum = b + c;
            let diff = b - c;
            let centre = a + scale::<T>(sum, w3.re);
            let mut rot = times_i::<T>(scale::<T>(diff, w3.im));
            if stage.inverse {
                rot = -rot;
            }

            let k = j * stage.stride;
            let y0 = a + sum;
            let y1 = rotate(centre + rot, twiddles, k, stage.inverse);
            let y2 = rotate(centre - rot, twiddles, 2 * k, stage.inverse);

            store(buffer, i0, y0, stage.shift);
            store(buffer, i1, y1, stage.shift);
            store(buffer, i2, y2, stage.shift);
        }
    }
}

fn radix_5<T: FftNum>(buffer: &mut [T], twiddles: &TwiddleTable<T>, n: usize, stage: Stage) {
    // W_5 = (c1, s1), W_5^2 = (c2, s2)
    let w1 = twiddles.get(n / 5);
    let w2 = twiddles.get(2 * n / 5);
    let step = stage.step;

    for base in (0..n).step_by(stage.span) {
        for j in 0..step {
            let i0 = base + j;
            let (i1, i2, i3, i4) = (i0 + step, i0 + 2 * step, i0 + 3 * step, i0 + 4 * step);

            let a = load(buffer, i0);
            let b = load(buffer, i1);
            let c = load(buffer, i2);
            let d = load(buffer, i3);
            let e = load(buffer, i4);

            let sum_a = b + e;
            let diff_a = b - e;
            let sum_b = c + d;
            let diff_b = c - d;

            let centre1 = a + scale::<T>(sum_a, w1.re) + scale::<T>(sum_b, w2.re);
            let centre2 = a + scale::<T>(sum_a, w2.re) + scale::<T>(sum_b, w1.re);
            let mut rot1 =
                times_i::<T>(scale::<T>(diff_a, w1.im) + scale::<T>(diff_b, w2.im));
            let mut rot2 =
                times_i::<T>(scale::<T>(diff_a, w2.im) - scale::<T>(diff_b, w1.im));
            if stage.inverse {
                rot1 = -rot1;
                rot2 = -rot2;
            }

            let k = j * stage.stride;
            let y0 = a + sum_a + sum_b;
            let y1 = rotate(centre1 + rot1, twiddles, k, stage.inverse);
            let y2 = rotate(centre2 + rot2, twiddles, 2 * k, stage.inverse);
            let y3 = rotate(centre2 - rot2, twiddles, 3 * k, stage.inverse);
            let y4 = rotate(centre1 - rot1, twiddles, 4 * k, stage.inverse);

            store(buffer, i0, y0, stage.shift);
            store(buffer, i1, y1, stage.shift);
            store(buffer, i2, y2, stage.shift);
            store(buffer, i3, y3, stage.shift);
            store(buffer, i4, y4, stage.shift);
        }
    }
}

#[inline(always)]
pub(crate) fn load<T: FftNum>(buffer: &[T], index: usize) -> Wide<T> {
    Complex::new(buffer[2 * index].widen(), buffer[2 * index + 1].widen())
}

#[inline(always)]
pub(crate) fn store<T: FftNum>(buffer: &mut [T], index: usize, value: Wide<T>, shift: u32) {
    buffer[2 * index] = T::narrow(value.re, shift);
    buffer[2 * index + 1] = T::narrow(value.im, shift);
}

/// `value * w`, or `value * conj(w)` when `conjugate` is set.
#[inline(always)]
pub(crate) fn mul_twiddle<T: FftNum>(value: Wide<T>, w: Complex<T>, conjugate: bool) -> Wide<T> {
    let rr = T::mul_coef(value.re, w.re);
    let ii = T::mul_coef(value.im, w.im);
    let ri = T::mul_coef(value.re, w.im);
    let ir = T::mul_coef(value.im, w.re);
    if conjugate {
        Complex::new(rr + ii, ir - ri)
    } else {
        Complex::new(rr - ii, ri + ir)
    }
}

/// Applies `W_N^k`. `W^0` is skipped; fixed formats cannot hold 1.0 exactly.
#[inline(always)]
fn rotate<T: FftNum>(value: Wide<T>, twiddles: &TwiddleTable<T>, k: usize, inverse: bool) -> Wide<T> {
    if k == 0 {
        value
    } else {
        mul_twiddle::<T>(value, twiddles.get(k), inverse)
    }
}

/// `value * -i` forward, `value * i` inverse.
#[inline(always)]
fn rotate_90<T: FftNum>(value: Wide<T>, inverse: bool) -> Wide<T> {
    if inverse {
        times_i::<T>(value)
    } else {
        Complex::new(value.im, -value.re)
    }
}

#[inline(always)]
pub(crate) fn times_i<T: FftNum>(value: Wide<T>) -> Wide<T> {
    Complex::new(-value.im, value.re)
}

#[inline(always)]
fn scale<T: FftNum>(value: Wide<T>, coef: T) -> Wide<T> {
    Complex::new(T::mul_coef(value.re, coef), T::mul_coef(value.im, coef))
}

#[cfg(test)]
#[path = "butterfly_tests.rs"]
mod tests;
