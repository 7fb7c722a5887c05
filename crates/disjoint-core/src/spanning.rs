//! Minimum spanning forest (Kruskal) on top of [`DisjointSet`].
use std::hash::Hash;

use crate::disjoint_set::DisjointSet;
use crate::error::DisjointSetError;
use crate::strategy::FindCompress;

/// An undirected edge between two elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedEdge<E, W> {
    /// One endpoint.
    pub from: E,
    /// The other endpoint.
    pub to: E,
    /// Edge weight.
    pub weight: W,
}

impl<E, W> WeightedEdge<E, W> {
    /// Creates an edge.
    pub fn new(from: E, to: E, weight: W) -> Self {
        Self { from, to, weight }
    }
}

/// The edges chosen by [`minimum_spanning_forest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest<E, W> {
    /// Selected edges, in ascending weight order.
    pub edges: Vec<WeightedEdge<E, W>>,
    /// Sum of the selected weights.
    pub total_weight: W,
    /// Number of connected components (trees) in the forest.
    pub components: usize,
}

/// An edge weight that can be totalled without silent wrap-around.
pub trait Weight: Ord + Copy {
    /// The total of an empty forest.
    const ZERO: Self;

    /// Returns `self + other`, or `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Computes a minimum spanning forest over `nodes`.
///
/// Edges are stably sorted by ascending weight, so equal weights keep their
/// input order. An edge is selected exactly when its endpoints still have
/// different roots; selecting it unions them. With `n` nodes and `k`
/// components the result holds `n - k` edges.
///
/// # Errors
///
/// - [`DisjointSetError::ElementNotFound`] if an edge endpoint is not in
///   `nodes`.
/// - [`DisjointSetError::WeightOverflow`] if the running total of the
///   selected weights, taken in ascending order, leaves the range of `W`.
pub fn minimum_spanning_forest<E, W, C, N, I>(
    nodes: N,
    edges: I,
    strategy: C,
) -> Result<SpanningForest<E, W>, DisjointSetError>
where
    E: Eq + Hash + Clone,
    W: Weight,
    C: FindCompress,
    N: IntoIterator<Item = E>,
    I: IntoIterator<Item = WeightedEdge<E, W>>,
{
    let mut set = DisjointSet::with_strategy(strategy);
    set.make_sets(nodes);

    let mut candidates: Vec<WeightedEdge<E, W>> = edges.into_iter().collect();
    candidates.sort_by_key(|edge| edge.weight);

    let mut selected = Vec::new();
    for edge in candidates {
        if set.union(&edge.from, &edge.to)? {
            selected.push(edge);
        }
    }

    let total_weight = selected
        .iter()
        .try_fold(W::ZERO, |total, edge| total.checked_add(edge.weight))
        .ok_or(DisjointSetError::WeightOverflow)?;
    let components = set.set_count();
    log::debug!(
        "spanning forest: {} nodes, {} edges selected, {components} components",
        set.len(),
        selected.len()
    );

    Ok(SpanningForest {
        edges: selected,
        total_weight,
        components,
    })
}
