// src/scaling.rs

use crate::common::{Direction, Format};
use crate::fixed::{Q15, Q31};
use crate::plan::{MAX_STAGES, Radices};

/// Per-stage right shifts applied when butterfly results are stored.
///
/// For fixed-point formats the forward shifts add up to log2(N), so a
/// forward transform yields DFT(x)/N and the inverse needs no shift at all
/// to return x. Inputs are expected to stay below unit magnitude; larger
/// inputs saturate without being reported.
///
/// Stage results are rounded half to even, so rounding noise stays zero-mean
/// and a forward/inverse round trip loses about `sqrt(N)` LSBs rather than a
/// multiple of N. [`round_trip_tolerance`] gives the bound per format.
///
/// Floating-point formats never shift between stages. Their inverse ends
/// with an explicit 1/N pass instead, see [`ScalingSchedule::normalizes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingSchedule {
    shifts: [u8; MAX_STAGES],
    stages: usize,
    normalize: bool,
}

impl ScalingSchedule {
    pub(crate) fn new(radices: &Radices, format: Format, direction: Direction) -> Self {
        let mut shifts = [0u8; MAX_STAGES];
        let stages = radices.stages();

        if format.is_fixed_point() && !direction.is_inverse() {
            for (shift, radix) in shifts.iter_mut().zip(radices.as_slice()) {
                *shift = growth_bits(radix.size());
            }
        }

        Self {
            shifts,
            stages,
            normalize: direction.is_inverse() && !format.is_fixed_point(),
        }
    }

    #[inline]
    pub fn stage_shift(&self, stage: usize) -> u32 {
        self.shifts[stage] as u32
    }

    pub fn shifts(&self) -> &[u8] {
        &self.shifts[..self.stages]
    }

    pub fn total_shift(&self) -> u32 {
        self.shifts().iter().map(|&s| s as u32).sum()
    }

    /// Whether the transform ends with a multiply by 1/N.
    pub fn normalizes(&self) -> bool {
        self.normalize
    }
}

/// Largest per-sample error of a forward transform followed by its inverse,
/// for a transform of `len` points (the real length for real transforms) and
/// inputs inside the headroom contract.
///
/// Floating formats have fixed bounds. Fixed-point rounding noise adds up
/// over the network, so the bound for Q15 and Q31 is `6 * sqrt(len)` LSBs:
/// about 0.012 for Q15 at 4096 points and 0.017 at 8192.
pub fn round_trip_tolerance(format: Format, len: usize) -> f64 {
    let lsb = |frac: u32| 1.0 / (1u64 << frac) as f64;
    match format {
        Format::F16 => 0.02,
        Format::F32 => 1e-4,
        Format::F64 => 1e-10,
        Format::Q15 => 6.0 * libm::sqrt(len as f64) * lsb(Q15::FRAC),
        Format::Q31 => 6.0 * libm::sqrt(len as f64) * lsb(Q31::FRAC),
    }
}

/// Bits a radix-r butterfly can grow its largest input by: ceil(log2 r).
fn growth_bits(radix: usize) -> u8 {
    (usize::BITS - (radix - 1).leading_zeros()) as u8
}
