// src/tables/bitrev.rs

use alloc::sync::Arc;
use alloc::vec::Vec;

use super::TableCache;
use crate::plan::Radices;

static BITREV_TABLES: TableCache<BitReversalTable> = TableCache::new();

/// Output reordering for a decimation-in-frequency network.
///
/// `permutation[k]` is the position where frequency bin `k` lands after the
/// last stage: the digit reversal of `k` in the plan's radix base. Only
/// all-radix-2 plans give plain binary bit reversal. Because
/// every plan is a palindrome the permutation is an involution and can be
/// undone with the swaps listed in `pairs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReversalTable {
    len: usize,
    permutation: Vec<u16>,
    pairs: Vec<(u16, u16)>,
}

impl BitReversalTable {
    pub fn shared(len: usize, radices: &Radices) -> Arc<Self> {
        BITREV_TABLES.get_or_insert_with(len, || Self::build(len, radices))
    }

    pub(crate) fn build(len: usize, radices: &Radices) -> Self {
        let permutation: Vec<u16> = (0..len)
            .map(|k| digit_reverse(k, radices) as u16)
            .collect();

        let pairs = permutation
            .iter()
            .enumerate()
            .filter(|&(i, &j)| i < j as usize)
            .map(|(i, &j)| (i as u16, j))
            .collect();

        Self {
            len,
            permutation,
            pairs,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn permutation(&self) -> &[u16] {
        &self.permutation
    }

    /// Index pairs `(i, j)` with `i < j` that must trade places.
    pub fn pairs(&self) -> &[(u16, u16)] {
        &self.pairs
    }

    /// Reorders an interleaved complex buffer `[re0, im0, re1, im1, ...]`.
    pub fn apply<T: Copy>(&self, buffer: &mut [T]) {
        for &(i, j) in &self.pairs {
            let (i, j) = (2 * i as usize, 2 * j as usize);
            buffer.swap(i, j);
            buffer.swap(i + 1, j + 1);
        }
    }
}

fn digit_reverse(mut k: usize, radices: &Radices) -> usize {
    let mut pos = 0;
    for radix in radices.as_slice() {
        let r = radix.size();
        pos = pos * r + k % r;
        k /= r;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Format;
    use crate::plan::supported_lengths;

    fn table(len: usize) -> BitReversalTable {
        BitReversalTable::build(len, &Radices::for_length(len).unwrap())
    }

    #[test]
    fn test_precompute_bitrev_8() {
        // 0 (000) -> 0, 1 (001) -> 4, 2 (010) -> 2, 3 (011) -> 6
        // 4 (100) -> 1, 5 (101) -> 5, 6 (110) -> 3, 7 (111) -> 7
        assert_eq!(table(8).permutation(), &[0, 4, 2, 6, 1, 5, 3, 7]);
        assert_eq!(table(8).pairs(), &[(1, 4), (3, 6)]);
    }

    #[test]
    fn test_digit_reversal_16() {
        // Radices [4, 4]: base-4 digits swap places.
        assert_eq!(
            table(16).permutation(),
            &[0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]
        );
    }

    #[test]
    fn test_radix_2_plans_use_binary_reversal() {
        for bits in [1u32, 3] {
            let len = 1usize << bits;
            let t = table(len);
            for (k, &pos) in t.permutation().iter().enumerate() {
                let expected = k.reverse_bits() >> (usize::BITS - bits);
                assert_eq!(pos as usize, expected, "len {} index {}", len, k);
            }
        }
    }

    #[test]
    fn test_digit_reversal_12() {
        // Radices [2, 3, 2]: k = d0 + 2*d1 + 6*d2 lands at 6*d0 + 2*d1 + d2.
        assert_eq!(
            table(12).permutation(),
            &[0, 6, 2, 8, 4, 10, 1, 7, 3, 9, 5, 11]
        );
    }

    #[test]
    fn test_permutation_is_an_involution() {
        for len in supported_lengths(Format::F32) {
            let t = table(len);
            let perm = t.permutation();
            let mut seen = alloc::vec![false; len];
            for (k, &pos) in perm.iter().enumerate() {
                let pos = pos as usize;
                assert!(!seen[pos], "len {} maps twice to {}", len, pos);
                seen[pos] = true;
                assert_eq!(perm[pos] as usize, k, "len {} not self-inverse", len);
            }
        }
    }

    #[test]
    fn test_apply_swaps_complex_pairs() {
        // Radices [2, 2, 2]: pairs (1, 4) and (3, 6) trade places.
        let t = table(8);
        let mut buffer: Vec<u32> = (0..8).flat_map(|k| [k, 10 + k]).collect();
        t.apply(&mut buffer);
        assert_eq!(
            buffer,
            [0, 10, 4, 14, 2, 12, 6, 16, 1, 11, 5, 15, 3, 13, 7, 17]
        );
    }

    #[test]
    fn test_single_radix_4_stage_is_identity() {
        // One base-4 digit reverses to itself.
        let t = table(4);
        assert_eq!(t.permutation(), &[0, 1, 2, 3]);
        assert!(t.pairs().is_empty());
        let mut buffer = [0, 10, 1, 11, 2, 12, 3, 13];
        t.apply(&mut buffer);
        assert_eq!(buffer, [0, 10, 1, 11, 2, 12, 3, 13]);
    }
}
