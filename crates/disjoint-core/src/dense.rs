//! Disjoint sets over dense `usize` handles.
//!
//! When elements can be numbered up front, the forest fits in two vectors
//! instead of two hash maps. Handles are allocated in order by
//! [`DenseDisjointSet::make_set`] (or in bulk by [`DenseDisjointSet::new`]),
//! so handle `i` is valid exactly when `i < len()`.
//!
//! Observable behaviour matches [`crate::DisjointSet`]: the same strategies
//! resolve roots, the same union-by-rank tie-break picks the second root on
//! equal ranks, and an unknown handle is [`DisjointSetError::ElementNotFound`]
//! rather than an index panic.
use crate::error::DisjointSetError;
use crate::rank::{Link, link_by_rank};
use crate::strategy::{FindCompress, FullCompression};

/// A union-find structure over handles `0..len()`.
#[derive(Debug, Clone)]
pub struct DenseDisjointSet<C = FullCompression> {
    parent: Vec<usize>,
    rank: Vec<u32>,
    strategy: C,
}

impl DenseDisjointSet {
    /// Creates `n` singleton sets with handles `0..n`, using
    /// [`FullCompression`].
    pub fn new(n: usize) -> Self {
        Self::with_strategy(n, FullCompression)
    }
}

impl<C: FindCompress> DenseDisjointSet<C> {
    /// Creates `n` singleton sets with handles `0..n`, using `strategy`.
    pub fn with_strategy(n: usize, strategy: C) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            strategy,
        }
    }

    /// Allocates a new singleton set and returns its handle.
    pub fn make_set(&mut self) -> usize {
        let handle = self.parent.len();
        self.parent.push(handle);
        self.rank.push(0);
        handle
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementNotFound`] if `x >= len()`.
    pub fn find(&mut self, x: usize) -> Result<usize, DisjointSetError> {
        self.strategy.resolve(&mut self.parent, &x)
    }

    /// Merges the sets containing `a` and `b`, returning `true` if they were
    /// distinct.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementNotFound`] if either handle is out
    /// of range; nothing is modified in that case.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, DisjointSetError> {
        if a >= self.len() || b >= self.len() {
            return Err(DisjointSetError::ElementNotFound);
        }

        let ra = self.find(a)?;
        let rb = self.find(b)?;
        if ra == rb {
            return Ok(false);
        }

        // Roots index the same vectors as `rank`, so both lookups succeed.
        let (Some(&rank_a), Some(&rank_b)) = (self.rank.get(ra), self.rank.get(rb)) else {
            return Err(DisjointSetError::ElementNotFound);
        };

        match link_by_rank(rank_a, rank_b) {
            Link::SecondUnderFirst => self.relink(rb, ra, None),
            Link::FirstUnderSecond { promote } => {
                self.relink(ra, rb, promote.then_some(rank_b.saturating_add(1)));
            }
        }
        Ok(true)
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementNotFound`] if either handle is out
    /// of range.
    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }

    /// Returns the stored rank of handle `x`.
    pub fn rank(&self, x: usize) -> Option<u32> {
        self.rank.get(x).copied()
    }

    /// Returns the number of handles in this set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no handle has been allocated.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Points root `child` at root `parent`, optionally setting `parent`'s
    /// new rank.
    fn relink(&mut self, child: usize, parent: usize, new_rank: Option<u32>) {
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        if let (Some(rank), Some(slot)) = (new_rank, self.rank.get_mut(parent)) {
            *slot = rank;
        }
    }
}
