use super::*;
use crate::fixed::{Q15, Q31};
use crate::test_utils::{naive_dct4, random_real};
use alloc::vec;
use approx::assert_abs_diff_eq;
use half::f16;

fn orthonormal(len: usize) -> f64 {
    libm::sqrt(2.0 / len as f64)
}

fn run<T: FftNum>(len: usize, signal: &[f64], normalize: f64) -> Vec<f64> {
    let dct = Dct4::<T>::new(len, T::from_f64(normalize)).unwrap();
    let mut buffer: Vec<T> = signal.iter().map(|&x| T::from_f64(x)).collect();
    dct.transform(&mut buffer);
    buffer.iter().map(|v| v.to_f64()).collect()
}

fn max_diff(actual: &[f64], expected: &[f64]) -> f64 {
    assert_eq!(actual.len(), expected.len());
    actual
        .iter()
        .zip(expected)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

fn cosine_basis(len: usize, bin: usize, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|n| {
            let phase = core::f64::consts::PI / len as f64 * (n as f64 + 0.5) * (bin as f64 + 0.5);
            amplitude * phase.cos()
        })
        .collect()
}

#[test]
fn test_f64_matches_naive_dct() {
    for len in [128, 512, 2048] {
        let signal = random_real(len, len as u64, 0.5);
        let normalize = orthonormal(len);
        let expected: Vec<f64> = naive_dct4(&signal).iter().map(|x| x * normalize).collect();
        let out = run::<f64>(len, &signal, normalize);
        assert!(max_diff(&out, &expected) < 1e-10, "len {}", len);
    }
}

#[test]
fn test_f32_matches_naive_dct() {
    let len = 512;
    let signal = random_real(len, 3, 0.5);
    let expected: Vec<f64> = naive_dct4(&signal).iter().map(|x| x * 0.25).collect();
    let out = run::<f32>(len, &signal, 0.25);
    assert!(max_diff(&out, &expected) < 1e-4);
}

#[test]
fn test_orthonormal_dct_is_its_own_inverse() {
    for &len in &DCT4_LENGTHS {
        let signal = random_real(len, 21, 0.5);
        let dct = Dct4::<f64>::new(len, orthonormal(len)).unwrap();
        let mut buffer = signal.clone();
        dct.transform(&mut buffer);
        dct.transform(&mut buffer);
        assert!(max_diff(&buffer, &signal) < 1e-10, "f64 len {}", len);

        let once = run::<f32>(len, &signal, orthonormal(len));
        let twice = run::<f32>(len, &once, orthonormal(len));
        assert!(max_diff(&twice, &signal) < 1e-4, "f32 len {}", len);
    }

    for len in [128, 512] {
        let signal = random_real(len, 22, 0.5);
        let once = run::<f16>(len, &signal, orthonormal(len));
        let twice = run::<f16>(len, &once, orthonormal(len));
        assert!(max_diff(&twice, &signal) < 0.02, "f16 len {}", len);
    }
}

#[test]
fn test_fixed_output_is_scaled_by_half_len() {
    for len in [128, 512, 2048] {
        let signal = random_real(len, 5, 0.5);
        let normalize = orthonormal(len);
        let expected: Vec<f64> = naive_dct4(&signal)
            .iter()
            .map(|x| x * normalize * 2.0 / len as f64)
            .collect();

        let q15 = run::<Q15>(len, &signal, normalize);
        assert!(max_diff(&q15, &expected) < 4.0 / 32768.0, "q15 len {}", len);

        let q31 = run::<Q31>(len, &signal, normalize);
        assert!(max_diff(&q31, &expected) < 4.0 / 2147483648.0, "q31 len {}", len);
    }
}

#[test]
fn test_single_cosine_lands_in_one_bin() {
    let (len, bin) = (512, 7);
    // sqrt(2/N) * 0.5 * N/2
    let out = run::<f32>(len, &cosine_basis(len, bin, 0.5), orthonormal(len));
    for (k, &value) in out.iter().enumerate() {
        let expected = if k == bin { 8.0 } else { 0.0 };
        assert_abs_diff_eq!(value, expected, epsilon = 1e-4);
    }
}

#[test]
fn test_single_cosine_lands_in_one_bin_q15() {
    let (len, bin) = (128, 5);
    // 0.125 * 0.5 * N/2, divided by N/2.
    let out = run::<Q15>(len, &cosine_basis(len, bin, 0.5), 0.125);
    let lsb = 1.0 / 32768.0;
    for (k, &value) in out.iter().enumerate() {
        let expected = if k == bin { 0.0625 } else { 0.0 };
        assert_abs_diff_eq!(value, expected, epsilon = 2.0 * lsb);
    }
}

#[test]
fn test_invalid_lengths() {
    for len in [0, 64, 100, 256, 1024, 4096, 16384] {
        assert_eq!(
            Dct4::<f32>::new(len, 0.1).err(),
            Some(FftError::InvalidLength(len))
        );
    }
    assert!(Dct4::<Q15>::new(8192, Q15::from_f64(0.015625)).is_ok());
}

#[test]
fn test_checked_transform_rejects_wrong_length() {
    let dct = Dct4::<f64>::new(128, 0.125).unwrap();
    let mut short = vec![0.0; 127];
    assert_eq!(
        dct.transform_checked(&mut short),
        Err(FftError::SizeMismatch { expected: 128, actual: 127 })
    );
    let mut exact = vec![0.0; 128];
    assert_eq!(dct.transform_checked(&mut exact), Ok(()));
}

#[test]
#[should_panic]
fn test_unchecked_transform_panics_on_short_buffer() {
    let dct = Dct4::<f32>::new(128, 0.125).unwrap();
    let mut buffer = vec![0.0f32; 64];
    dct.transform(&mut buffer);
}

#[test]
fn test_descriptors() {
    let dct = Dct4::<Q15>::new(128, Q15::from_f64(0.125)).unwrap();
    assert_eq!(dct.fft_len(), 128);
    assert_eq!(dct.format(), Format::Q15);
    assert_eq!(dct.normalize(), Q15::from_bits(4096));
    assert_eq!(dct.scaling().total_shift(), 6);

    let dct = Dct4::<f64>::new(2048, 0.03125).unwrap();
    assert_eq!(dct.scaling().total_shift(), 0);
}
