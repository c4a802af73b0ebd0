// src/plan.rs

use alloc::sync::Arc;
use core::fmt;

use crate::common::{Direction, FftError, FftNum, Format};
use crate::scaling::ScalingSchedule;
use crate::tables::{BitReversalTable, TwiddleTable};

/// Upper bound on the number of butterfly stages of any supported plan.
pub(crate) const MAX_STAGES: usize = 16;

/// Largest supported complex transform length.
pub const MAX_COMPLEX_LEN: usize = 4096;

/// Composite lengths served by a central radix-3 or radix-5 stage.
/// Floating-point formats only.
pub const MIXED_RADIX_LENGTHS: [usize; 9] = [12, 20, 48, 80, 192, 320, 768, 1280, 3072];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Two,
    Three,
    Four,
    Five,
}

impl Radix {
    #[inline]
    pub fn size(self) -> usize {
        match self {
            Radix::Two => 2,
            Radix::Three => 3,
            Radix::Four => 4,
            Radix::Five => 5,
        }
    }
}

/// Stage-by-stage radix sequence of a transform length.
///
/// Sequences are always palindromes. The digit reversal of a palindromic
/// mixed base is its own inverse, which lets the reordering pass run as a
/// list of swaps.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Radices {
    radices: [Radix; MAX_STAGES],
    stages: usize,
}

impl Radices {
    pub fn for_length(len: usize) -> Option<Self> {
        let mut plan = Radices {
            radices: [Radix::Two; MAX_STAGES],
            stages: 0,
        };

        if len.is_power_of_two() && (2..=MAX_COMPLEX_LEN).contains(&len) {
            let log2 = len.trailing_zeros() as usize;
            match log2 % 4 {
                0 | 2 => plan.push_fours(log2 / 2),
                1 => {
                    plan.push_fours(log2 / 4);
                    plan.push(Radix::Two);
                    plan.push_fours(log2 / 4);
                }
                _ => {
                    plan.push_fours(log2 / 4);
                    plan.push(Radix::Two);
                    plan.push(Radix::Two);
                    plan.push(Radix::Two);
                    plan.push_fours(log2 / 4);
                }
            }
            return Some(plan);
        }

        if !MIXED_RADIX_LENGTHS.contains(&len) {
            return None;
        }
        let center = if len % 3 == 0 { Radix::Three } else { Radix::Five };
        // What is left is 4^j.
        let log4 = ((len / center.size()).trailing_zeros() / 2) as usize;
        plan.push_fours(log4 / 2);
        if log4 % 2 == 1 {
            plan.push(Radix::Two);
            plan.push(center);
            plan.push(Radix::Two);
        } else {
            plan.push(center);
        }
        plan.push_fours(log4 / 2);
        Some(plan)
    }

    fn push(&mut self, radix: Radix) {
        self.radices[self.stages] = radix;
        self.stages += 1;
    }

    fn push_fours(&mut self, count: usize) {
        for _ in 0..count {
            self.push(Radix::Four);
        }
    }

    pub fn as_slice(&self) -> &[Radix] {
        &self.radices[..self.stages]
    }

    pub fn stages(&self) -> usize {
        self.stages
    }

    /// True when a radix-3 or radix-5 stage is present.
    pub fn is_mixed(&self) -> bool {
        self.as_slice()
            .iter()
            .any(|r| matches!(r, Radix::Three | Radix::Five))
    }

    pub fn product(&self) -> usize {
        self.as_slice().iter().map(|r| r.size()).product()
    }

    /// Number of leading `W_len^k` coefficients the butterflies of this plan read.
    pub(crate) fn twiddle_count(&self, len: usize) -> usize {
        let mut count = 1;
        let mut span = len;
        for radix in self.as_slice() {
            let r = radix.size();
            let step = span / r;
            let stride = len / span;
            count = count.max((r - 1) * (step - 1) * stride + 1);
            match radix {
                Radix::Three => count = count.max(len / 3 + 1),
                Radix::Five => count = count.max(2 * len / 5 + 1),
                _ => {}
            }
            span = step;
        }
        count
    }
}

impl fmt::Debug for Radices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.as_slice().iter().map(|r| r.size()))
            .finish()
    }
}

/// Whether `len` is a valid complex transform length for `format`.
pub fn is_supported(len: usize, format: Format) -> bool {
    match Radices::for_length(len) {
        Some(radices) => !(radices.is_mixed() && format.is_fixed_point()),
        None => false,
    }
}

/// Every complex transform length accepted for `format`, ascending.
pub fn supported_lengths(format: Format) -> impl Iterator<Item = usize> {
    (1..=MAX_COMPLEX_LEN.trailing_zeros())
        .map(|bits| 1usize << bits)
        .chain(MIXED_RADIX_LENGTHS)
        .filter(move |&len| is_supported(len, format))
        .collect::<alloc::collections::BTreeSet<_>>()
        .into_iter()
}

/// A complex transform length bound to its shared tables and scaling schedules.
#[derive(Clone, Debug)]
pub(crate) struct ComplexPlan<T> {
    pub(crate) len: usize,
    pub(crate) radices: Radices,
    pub(crate) twiddles: Arc<TwiddleTable<T>>,
    pub(crate) bitrev: Arc<BitReversalTable>,
    forward: ScalingSchedule,
    inverse: ScalingSchedule,
}

impl<T: FftNum> ComplexPlan<T> {
    pub(crate) fn new(len: usize) -> Result<Self, FftError> {
        let radices = Radices::for_length(len).ok_or(FftError::InvalidLength(len))?;
        if radices.is_mixed() && T::FORMAT.is_fixed_point() {
            return Err(FftError::InvalidLength(len));
        }

        Ok(Self {
            len,
            radices,
            twiddles: TwiddleTable::shared(len),
            bitrev: BitReversalTable::shared(len, &radices),
            forward: ScalingSchedule::new(&radices, T::FORMAT, Direction::Forward),
            inverse: ScalingSchedule::new(&radices, T::FORMAT, Direction::Inverse),
        })
    }

    #[inline]
    pub(crate) fn schedule(&self, direction: Direction) -> &ScalingSchedule {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Inverse => &self.inverse,
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
