// src/test_utils.rs
//! Reference oracle and signal helpers shared by the unit tests.

use alloc::vec::Vec;
use core::f64::consts::PI;

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{Direction, FftNum};

/// Unnormalised O(N^2) DFT in f64.
pub(crate) fn naive_dft(input: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = input.len();
    let sign = if direction.is_inverse() { 1.0 } else { -1.0 };
    let roots: Vec<Complex64> = (0..n)
        .map(|k| Complex64::from_polar(1.0, sign * 2.0 * PI * k as f64 / n as f64))
        .collect();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, &x)| x * roots[(j * k) % n])
                .sum()
        })
        .collect()
}

/// Unnormalised O(N^2) DCT-IV in f64.
pub(crate) fn naive_dct4(input: &[f64]) -> Vec<f64> {
    let n = input.len();
    // cos(pi * i / (4N)) for i in 0..8N covers every (2j+1)(2k+1) mod 8N.
    let cosines: Vec<f64> = (0..8 * n)
        .map(|i| (PI * i as f64 / (4 * n) as f64).cos())
        .collect();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, &x)| x * cosines[((2 * j + 1) * (2 * k + 1)) % (8 * n)])
                .sum()
        })
        .collect()
}

/// Complex samples with both parts uniform in `[-amplitude, amplitude)`.
pub(crate) fn random_signal(len: usize, seed: u64, amplitude: f64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            Complex64::new(
                rng.random_range(-amplitude..amplitude),
                rng.random_range(-amplitude..amplitude),
            )
        })
        .collect()
}

pub(crate) fn random_real(len: usize, seed: u64, amplitude: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.random_range(-amplitude..amplitude))
        .collect()
}

pub(crate) fn interleave<T: FftNum>(signal: &[Complex64]) -> Vec<T> {
    signal
        .iter()
        .flat_map(|x| [T::from_f64(x.re), T::from_f64(x.im)])
        .collect()
}

pub(crate) fn deinterleave<T: FftNum>(buffer: &[T]) -> Vec<Complex64> {
    buffer
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0].to_f64(), pair[1].to_f64()))
        .collect()
}

pub(crate) fn max_error(actual: &[Complex64], expected: &[Complex64]) -> f64 {
    assert_eq!(actual.len(), expected.len());
    actual
        .iter()
        .zip(expected)
        .map(|(&a, &b)| (a - b).norm())
        .fold(0.0, f64::max)
}

pub(crate) fn scaled(values: &[Complex64], factor: f64) -> Vec<Complex64> {
    values.iter().map(|&x| x * factor).collect()
}
