//! Root-finding strategies with path compression.
//!
//! A strategy resolves the representative (root) of an element inside a
//! parent forest and shortens the traversed path as a side effect. The
//! container owns the forest and lends it to the strategy for the duration
//! of one `find` call; strategies themselves carry no state.
//!
//! Two strategies are provided:
//!
//! - [`FullCompression`]: two passes, every node on the path ends up pointing
//!   directly at the root.
//! - [`PathHalving`]: one pass, every other node on the path is re-pointed to
//!   its grandparent.
//!
//! Both return identical roots for any forest state; they differ only in
//! which parent links they rewrite.
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::error::DisjointSetError;

mod full;
mod halving;

pub use full::FullCompression;
pub use halving::PathHalving;

// ---------------------------------------------------------------------------
// ParentMap
// ---------------------------------------------------------------------------

/// Storage for a parent forest: element to parent, roots map to themselves.
///
/// Implemented for `HashMap<E, E, S>` (opaque, hashable elements) and for
/// `Vec<usize>` (dense handles `0..len`).
pub trait ParentMap {
    /// The element type stored in the forest.
    type Element: Clone + PartialEq;

    /// Returns the parent of `element`, or `None` if it is not registered.
    fn parent_of(&self, element: &Self::Element) -> Option<&Self::Element>;

    /// Re-points `element` at `parent`. Does nothing if `element` is not
    /// registered.
    fn set_parent(&mut self, element: &Self::Element, parent: Self::Element);
}

impl<E, S> ParentMap for HashMap<E, E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Element = E;

    fn parent_of(&self, element: &E) -> Option<&E> {
        self.get(element)
    }

    fn set_parent(&mut self, element: &E, parent: E) {
        if let Some(slot) = self.get_mut(element) {
            *slot = parent;
        }
    }
}

impl ParentMap for Vec<usize> {
    type Element = usize;

    fn parent_of(&self, element: &usize) -> Option<&usize> {
        self.get(*element)
    }

    fn set_parent(&mut self, element: &usize, parent: usize) {
        if let Some(slot) = self.get_mut(*element) {
            *slot = parent;
        }
    }
}

// ---------------------------------------------------------------------------
// FindCompress
// ---------------------------------------------------------------------------

/// A root-finding policy that compresses the path it walks.
///
/// # Contract
///
/// - `element` must be registered in `parents`; otherwise the call fails with
///   [`DisjointSetError::ElementNotFound`] and `parents` is left untouched.
/// - The returned root `r` satisfies `parents[r] == r` and is reachable from
///   `element` by following parent links.
/// - Only parent links of nodes on the traversed path may change, and each
///   such node keeps the same root.
/// - `parents` must be acyclic apart from root self-loops. A cycle without a
///   root makes the traversal loop forever.
pub trait FindCompress {
    /// Returns the root of `element`, compressing the path to it.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::ElementNotFound`] if `element` (or, for
    /// malformed injected state, any node on its path) is not a key of
    /// `parents`.
    fn resolve<M>(
        &self,
        parents: &mut M,
        element: &M::Element,
    ) -> Result<M::Element, DisjointSetError>
    where
        M: ParentMap + ?Sized;
}

// ---------------------------------------------------------------------------
// CompressionKind
// ---------------------------------------------------------------------------

/// A strategy chosen at runtime, dispatching to one of the provided
/// strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompressionKind {
    /// Dispatch to [`FullCompression`] (default).
    #[default]
    Full,
    /// Dispatch to [`PathHalving`].
    Halving,
}

impl CompressionKind {
    /// Short lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Halving => "halving",
        }
    }
}

impl FindCompress for CompressionKind {
    fn resolve<M>(
        &self,
        parents: &mut M,
        element: &M::Element,
    ) -> Result<M::Element, DisjointSetError>
    where
        M: ParentMap + ?Sized,
    {
        match self {
            Self::Full => FullCompression.resolve(parents, element),
            Self::Halving => PathHalving.resolve(parents, element),
        }
    }
}

impl std::fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
