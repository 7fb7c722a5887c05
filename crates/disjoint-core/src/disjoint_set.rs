//! Disjoint-set container over opaque, hashable elements.
//!
//! The forest is a parent mapping (`element -> parent`, roots map to
//! themselves) plus a rank mapping used by union-by-rank. Every query and
//! mutation funnels through [`DisjointSet::find`], the only place the
//! configured [`FindCompress`] strategy runs. [`DisjointSet::union`] first
//! checks both roots and their ranks read-only, then calls it twice and
//! rewrites exactly one parent link (and at most one rank).
//!
//! Elements must be registered with [`DisjointSet::make_set`] before they can
//! be found or unioned. Lookups never auto-register, so "this group does not
//! exist yet" stays distinct from "this group has one member".
//!
//! The container is single-owner and not synchronised: `find` writes to the
//! parent mapping, so concurrent use needs an external exclusive lock around
//! the whole structure.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::error::DisjointSetError;
use crate::rank::{Link, link_by_rank};
use crate::strategy::{FindCompress, FullCompression};

mod builder;

pub use builder::DisjointSetBuilder;

/// A partition of registered elements into disjoint equivalence classes.
///
/// `C` is the root-finding strategy; it defaults to [`FullCompression`].
///
/// # Tie-break
///
/// When two roots of equal rank are merged by `union(first, second)`, the
/// root of `second` becomes the representative and its rank grows by one.
/// Given the same sequence of calls, the resulting forest is identical for
/// every strategy.
#[derive(Debug, Clone)]
pub struct DisjointSet<E, C = FullCompression> {
    parents: HashMap<E, E>,
    ranks: HashMap<E, u32>,
    strategy: C,
}

impl<E> DisjointSet<E>
where
    E: Eq + Hash + Clone,
{
    /// Creates an empty container using [`FullCompression`].
    pub fn new() -> Self {
        Self::with_strategy(FullCompression)
    }

    /// Returns a builder for containers with injected state or a custom
    /// strategy.
    pub fn builder() -> DisjointSetBuilder<E> {
        DisjointSetBuilder::new()
    }
}

impl<E, C> Default for DisjointSet<E, C>
where
    E: Eq + Hash + Clone,
    C: FindCompress + Default,
{
    fn default() -> Self {
        Self::with_strategy(C::default())
    }
}

impl<E, C> DisjointSet<E, C>
where
    E: Eq + Hash + Clone,
    C: FindCompress,
{
    /// Creates an empty container using `strategy` for root resolution.
    pub fn with_strategy(strategy: C) -> Self {
        Self::from_parts(HashMap::new(), HashMap::new(), strategy)
    }

    /// Wraps existing mappings. The caller vouches that they describe a
    /// valid forest.
    pub(crate) fn from_parts(
        parents: HashMap<E, E>,
        ranks: HashMap<E, u32>,
        strategy: C,
    ) -> Self {
        Self {
            parents,
            ranks,
            strategy,
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Registers `element` as a singleton set with rank 0.
    ///
    /// Does nothing if `element` is already registered, whatever set it has
    /// since been merged into.
    pub fn make_set(&mut self, element: E) {
        if let Entry::Vacant(slot) = self.parents.entry(element) {
            let root = slot.key().clone();
            self.ranks.insert(root.clone(), 0);
            slot.insert(root);
        }
    }

    /// Registers every element of `elements`, in iteration order.
    pub fn make_sets<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.make_set(element);
        }
    }

    /// Registers an element that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::NullElement`] if `element` is `None`.
    pub fn try_make_set(&mut self, element: Option<E>) -> Result<(), DisjointSetError> {
        let element = element.ok_or(DisjointSetError::NullElement {
            argument: "element",
        })?;
        self.make_set(element);
        Ok(())
    }

    /// Registers a sequence of possibly absent elements, stopping at the
    /// first `None`. Elements before it stay registered.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::NullElement`] on the first `None`.
    pub fn try_make_sets<I>(&mut self, elements: I) -> Result<(), DisjointSetError>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        for element in elements {
            self.try_make_set(element)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Find / union
    // -----------------------------------------------------------------------

    /// Returns the representative of the set containing `element`.
    ///
    /// May shorten parent links on the path to the root; never changes which
    /// root any element belongs to and never touches ranks.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementNotFound`] if `element` was never
    /// registered.
    pub fn find(&mut self, element: &E) -> Result<E, DisjointSetError> {
        self.strategy.resolve(&mut self.parents, element)
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// Returns `true` if two distinct sets were merged and `false` if both
    /// elements already shared a root (in which case no root or rank
    /// changes; the two paths are still compressed).
    ///
    /// # Errors
    ///
    /// - [`DisjointSetError::ElementNotFound`] if either element is not
    ///   registered, or injected state has a dangling parent on either path.
    /// - [`DisjointSetError::InvalidConfiguration`] if injected state lacks a
    ///   rank for one of the roots.
    ///
    /// Both roots and their ranks are checked before any path is
    /// compressed, so on error both mappings are left exactly as they were.
    pub fn union(&mut self, first: &E, second: &E) -> Result<bool, DisjointSetError> {
        let first_root = self.peek_root(first)?;
        let second_root = self.peek_root(second)?;
        let ranks = if first_root == second_root {
            None
        } else {
            Some((self.root_rank(&first_root)?, self.root_rank(&second_root)?))
        };

        // Both paths and both ranks are valid; compressing can no longer fail
        // halfway.
        self.find(first)?;
        self.find(second)?;
        let Some((first_rank, second_rank)) = ranks else {
            return Ok(false);
        };

        match link_by_rank(first_rank, second_rank) {
            Link::SecondUnderFirst => {
                log::trace!("union: rank {second_rank} root attached under rank {first_rank}");
                self.parents.insert(second_root, first_root);
            }
            Link::FirstUnderSecond { promote } => {
                log::trace!("union: rank {first_rank} root attached under rank {second_rank}");
                if promote {
                    self.ranks
                        .insert(second_root.clone(), second_rank.saturating_add(1));
                }
                self.parents.insert(first_root, second_root);
            }
        }
        Ok(true)
    }

    /// Returns `true` if `first` and `second` belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementNotFound`] if either element is not
    /// registered.
    pub fn same_set(&mut self, first: &E, second: &E) -> Result<bool, DisjointSetError> {
        Ok(self.find(first)? == self.find(second)?)
    }

    /// Groups every registered element under its current representative.
    ///
    /// # Errors
    ///
    /// Only fails on malformed injected state, with the error of the
    /// underlying [`DisjointSet::find`].
    pub fn groups(&mut self) -> Result<HashMap<E, Vec<E>>, DisjointSetError> {
        let elements: Vec<E> = self.parents.keys().cloned().collect();
        let mut groups: HashMap<E, Vec<E>> = HashMap::new();
        for element in elements {
            let root = self.find(&element)?;
            groups.entry(root).or_default().push(element);
        }
        Ok(groups)
    }

    /// Walks to the root of `element` without compressing.
    fn peek_root(&self, element: &E) -> Result<E, DisjointSetError> {
        let mut node = element;
        loop {
            let parent = self
                .parents
                .get(node)
                .ok_or(DisjointSetError::ElementNotFound)?;
            if parent == node {
                return Ok(parent.clone());
            }
            node = parent;
        }
    }

    fn root_rank(&self, root: &E) -> Result<u32, DisjointSetError> {
        self.ranks
            .get(root)
            .copied()
            .ok_or(DisjointSetError::InvalidConfiguration {
                missing: "rank entry for a root",
            })
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Returns `true` if `element` has been registered.
    pub fn contains(&self, element: &E) -> bool {
        self.parents.contains_key(element)
    }

    /// Returns the number of registered elements.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if no element has been registered.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the stored rank of `element`. Only meaningful for roots.
    pub fn rank(&self, element: &E) -> Option<u32> {
        self.ranks.get(element).copied()
    }

    /// Returns the number of disjoint sets (roots).
    pub fn set_count(&self) -> usize {
        self.parents
            .iter()
            .filter(|(element, parent)| element == parent)
            .count()
    }

    /// The parent mapping.
    pub fn parents(&self) -> &HashMap<E, E> {
        &self.parents
    }

    /// The rank mapping.
    pub fn ranks(&self) -> &HashMap<E, u32> {
        &self.ranks
    }

    /// The configured strategy.
    pub fn strategy(&self) -> &C {
        &self.strategy
    }

    /// Consumes the container, returning the parent and rank mappings.
    ///
    /// Feed them back through [`DisjointSetBuilder`] to resume the forest.
    pub fn into_parts(self) -> (HashMap<E, E>, HashMap<E, u32>) {
        (self.parents, self.ranks)
    }
}

#[cfg(test)]
mod tests;
