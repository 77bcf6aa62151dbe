//! GF(2) vectors over edge ids ("support vectors").
//!
//! Bits are packed into `u64` words; bits past `len` in the last word are
//! always zero so word-wise XOR and popcount stay exact. Binary operations on
//! vectors of different length fail with `GraphError::LengthMismatch`.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, SpanningTree};

const WORD: usize = u64::BITS as usize;

/// Fixed-length bit vector indexed by edge id.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SupportVector {
    len: usize,
    words: Vec<u64>,
}

impl SupportVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            len,
            words: vec![0; len.div_ceil(WORD)],
        }
    }

    /// Single bit set at `idx`.
    pub fn unit(len: usize, idx: usize) -> Self {
        let mut v = Self::zeros(len);
        v.set(idx, true);
        v
    }

    /// Bits set at every listed index; repeated indices cancel out.
    pub fn from_ones<I: IntoIterator<Item = usize>>(len: usize, ones: I) -> Self {
        let mut v = Self::zeros(len);
        for i in ones {
            v.flip(i);
        }
        v
    }

    /// Incidence vector of an edge set (each edge toggles its bit).
    pub fn from_edges<'a, I: IntoIterator<Item = &'a EdgeId>>(len: usize, edges: I) -> Self {
        Self::from_ones(len, edges.into_iter().map(|e| e.0))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit {i} out of range for length {}", self.len);
        (self.words[i / WORD] >> (i % WORD)) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, i: usize, bit: bool) {
        assert!(i < self.len, "bit {i} out of range for length {}", self.len);
        let mask = 1u64 << (i % WORD);
        if bit {
            self.words[i / WORD] |= mask;
        } else {
            self.words[i / WORD] &= !mask;
        }
    }

    #[inline]
    pub fn flip(&mut self, i: usize) {
        assert!(i < self.len, "bit {i} out of range for length {}", self.len);
        self.words[i / WORD] ^= 1u64 << (i % WORD);
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Indices of set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &w)| {
            let mut rest = w;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let tz = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(wi * WORD + tz)
            })
        })
    }

    fn check_len(&self, other: &Self) -> Result<()> {
        if self.len == other.len {
            Ok(())
        } else {
            Err(GraphError::LengthMismatch {
                left: self.len,
                right: other.len,
            })
        }
    }

    /// Component-wise exclusive or.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.xor_assign(other)?;
        Ok(out)
    }

    pub fn xor_assign(&mut self, other: &Self) -> Result<()> {
        self.check_len(other)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= b;
        }
        Ok(())
    }

    /// `Σ aᵢ·bᵢ mod 2`, i.e. the parity of the common support.
    pub fn inner_product_mod2(&self, other: &Self) -> Result<u8> {
        self.check_len(other)?;
        let common: u32 = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones())
            .sum();
        Ok((common & 1) as u8)
    }

    /// True when the supports intersect in an odd number of positions.
    #[inline]
    pub fn odd_intersection(&self, other: &Self) -> Result<bool> {
        Ok(self.inner_product_mod2(other)? == 1)
    }
}

impl std::fmt::Debug for SupportVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.len)
            .map(|i| if self.get(i) { '1' } else { '0' })
            .collect();
        write!(f, "SupportVector({bits})")
    }
}

/// Starting constraints: one unit vector per non-tree edge, ascending by edge
/// id, at most `count` of them.
pub fn initial_support_vectors(
    tree: &SpanningTree,
    edge_count: usize,
    count: usize,
) -> Vec<SupportVector> {
    tree.non_tree_edges()
        .take(count)
        .map(|e| SupportVector::unit(edge_count, e.0))
        .collect()
}

/// Rank over GF(2) via Gaussian elimination on a scratch copy.
pub fn rank(vectors: &[SupportVector]) -> Result<usize> {
    let Some(first) = vectors.first() else {
        return Ok(0);
    };
    let mut rows: Vec<SupportVector> = Vec::with_capacity(vectors.len());
    for v in vectors {
        first.check_len(v)?;
        rows.push(v.clone());
    }
    let mut r = 0;
    for col in 0..first.len() {
        let Some(pivot) = (r..rows.len()).find(|&i| rows[i].get(col)) else {
            continue;
        };
        rows.swap(r, pivot);
        let (head, tail) = rows.split_at_mut(r + 1);
        let p = &head[r];
        for row in tail.iter_mut().filter(|row| row.get(col)) {
            row.xor_assign(p)?;
        }
        r += 1;
        if r == rows.len() {
            break;
        }
    }
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{special, traverse, PointId};
    use proptest::prelude::*;

    fn bits(v: &SupportVector) -> Vec<u8> {
        (0..v.len()).map(|i| v.get(i) as u8).collect()
    }

    #[test]
    fn xor_basic_identities() {
        let v = SupportVector::from_ones(70, [0, 3, 64, 69]);
        let zero = SupportVector::zeros(70);
        assert!(v.xor(&v).unwrap().is_zero());
        assert_eq!(v.xor(&zero).unwrap(), v);
        assert_eq!(v.count_ones(), 4);
        assert_eq!(v.ones().collect::<Vec<_>>(), vec![0, 3, 64, 69]);
    }

    #[test]
    fn length_mismatch_is_fatal() {
        let a = SupportVector::zeros(5);
        let b = SupportVector::zeros(6);
        let err = a.xor(&b).unwrap_err();
        assert_eq!(err, GraphError::LengthMismatch { left: 5, right: 6 });
        assert!(err.is_fatal());
        assert!(a.inner_product_mod2(&b).is_err());
    }

    #[test]
    fn inner_product_counts_common_bits_mod_two() {
        // triangle {0,1,4} against constraint on edge 4
        let cycle = SupportVector::from_edges(5, &[EdgeId(0), EdgeId(1), EdgeId(4)]);
        let s = SupportVector::unit(5, 4);
        assert_eq!(cycle.inner_product_mod2(&s).unwrap(), 1);
        assert!(cycle.odd_intersection(&s).unwrap());
        let two = SupportVector::from_ones(5, [0, 4]);
        assert_eq!(cycle.inner_product_mod2(&two).unwrap(), 0);
    }

    #[test]
    fn initial_vectors_follow_non_tree_edges() {
        let g = special::square_with_diagonal();
        let tree = traverse(&g, PointId(0)).unwrap();
        let vs = initial_support_vectors(&tree, g.edge_count(), g.cycle_rank());
        assert_eq!(
            vs.iter().map(bits).collect::<Vec<_>>(),
            vec![vec![0, 0, 0, 1, 0], vec![0, 0, 0, 0, 1]]
        );
    }

    #[test]
    fn rank_detects_dependence() {
        let a = SupportVector::from_ones(4, [0, 1]);
        let b = SupportVector::from_ones(4, [1, 2]);
        let c = a.xor(&b).unwrap();
        assert_eq!(rank(&[a.clone(), b.clone()]).unwrap(), 2);
        assert_eq!(rank(&[a, b, c]).unwrap(), 2);
        assert_eq!(rank(&[]).unwrap(), 0);
        assert_eq!(rank(&[SupportVector::zeros(4)]).unwrap(), 0);
    }

    #[test]
    fn debug_prints_bits() {
        let v = SupportVector::from_ones(4, [1]);
        assert_eq!(format!("{v:?}"), "SupportVector(0100)");
    }

    fn vec_strategy(len: usize) -> impl Strategy<Value = SupportVector> {
        proptest::collection::vec(any::<bool>(), len).prop_map(move |bs| {
            SupportVector::from_ones(len, bs.iter().enumerate().filter(|&(_, &b)| b).map(|(i, _)| i))
        })
    }

    proptest! {
        #[test]
        fn xor_is_commutative_and_associative(
            (a, b, c) in (1usize..150).prop_flat_map(|n| (vec_strategy(n), vec_strategy(n), vec_strategy(n)))
        ) {
            prop_assert_eq!(a.xor(&b).unwrap(), b.xor(&a).unwrap());
            let left = a.xor(&b).unwrap().xor(&c).unwrap();
            let right = a.xor(&b.xor(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
            prop_assert!(a.xor(&a).unwrap().is_zero());
        }

        #[test]
        fn inner_product_is_bilinear(
            (a, b, c) in (1usize..150).prop_flat_map(|n| (vec_strategy(n), vec_strategy(n), vec_strategy(n)))
        ) {
            let lhs = a.xor(&b).unwrap().inner_product_mod2(&c).unwrap();
            let rhs = a.inner_product_mod2(&c).unwrap() ^ b.inner_product_mod2(&c).unwrap();
            prop_assert_eq!(lhs, rhs);
        }
    }
}
