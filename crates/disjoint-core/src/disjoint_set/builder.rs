use std::collections::HashMap;
use std::hash::Hash;

use super::DisjointSet;
use crate::error::DisjointSetError;
use crate::strategy::{FindCompress, FullCompression};

/// Configures a [`DisjointSet`]: the root-finding strategy and, optionally,
/// a previously computed forest to resume from.
///
/// Injected mappings are taken as-is. The builder only rejects a parent
/// mapping without a rank mapping (or the reverse); it does not check that
/// the mappings describe an acyclic forest.
///
/// ```
/// use disjoint_core::{DisjointSet, PathHalving};
///
/// let mut first = DisjointSet::new();
/// first.make_sets(['a', 'b', 'c']);
/// first.union(&'a', &'b')?;
/// let (parents, ranks) = first.into_parts();
///
/// let mut resumed = DisjointSet::builder()
///     .parents(parents)
///     .ranks(ranks)
///     .strategy(PathHalving)
///     .build()?;
/// assert_eq!(resumed.find(&'a')?, 'b');
/// # Ok::<(), disjoint_core::DisjointSetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSetBuilder<E, C = FullCompression> {
    parents: Option<HashMap<E, E>>,
    ranks: Option<HashMap<E, u32>>,
    strategy: C,
}

impl<E> DisjointSetBuilder<E> {
    /// Creates a builder for an empty container using [`FullCompression`].
    pub fn new() -> Self {
        Self {
            parents: None,
            ranks: None,
            strategy: FullCompression,
        }
    }
}

impl<E> Default for DisjointSetBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> DisjointSetBuilder<E, C> {
    /// Injects a parent mapping (`element -> parent`, roots map to
    /// themselves).
    #[must_use]
    pub fn parents(mut self, parents: HashMap<E, E>) -> Self {
        self.parents = Some(parents);
        self
    }

    /// Injects a rank mapping.
    #[must_use]
    pub fn ranks(mut self, ranks: HashMap<E, u32>) -> Self {
        self.ranks = Some(ranks);
        self
    }

    /// Replaces the root-finding strategy.
    pub fn strategy<D>(self, strategy: D) -> DisjointSetBuilder<E, D> {
        DisjointSetBuilder {
            parents: self.parents,
            ranks: self.ranks,
            strategy,
        }
    }
}

impl<E, C> DisjointSetBuilder<E, C>
where
    E: Eq + Hash + Clone,
    C: FindCompress,
{
    /// Builds the container.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::InvalidConfiguration`] if only one of the
    /// parent and rank mappings was supplied.
    pub fn build(self) -> Result<DisjointSet<E, C>, DisjointSetError> {
        let Self {
            parents,
            ranks,
            strategy,
        } = self;
        match (parents, ranks) {
            (Some(parents), Some(ranks)) => {
                log::debug!(
                    "resuming disjoint set with {} elements and {} ranks",
                    parents.len(),
                    ranks.len()
                );
                Ok(DisjointSet::from_parts(parents, ranks, strategy))
            }
            (None, None) => Ok(DisjointSet::with_strategy(strategy)),
            (Some(_), None) => Err(DisjointSetError::InvalidConfiguration {
                missing: "rank mapping",
            }),
            (None, Some(_)) => Err(DisjointSetError::InvalidConfiguration {
                missing: "parent mapping",
            }),
        }
    }
}
