//! Disjoint-set (union-find) containers with union-by-rank and pluggable
//! path compression.
//!
//! - [`DisjointSet`] partitions opaque, hashable elements.
//! - [`DenseDisjointSet`] does the same for dense `usize` handles.
//! - [`FindCompress`] is the root-finding strategy seam, with
//!   [`FullCompression`] and [`PathHalving`] provided.
//! - [`minimum_spanning_forest`] runs Kruskal's algorithm on top.
//!
//! ```
//! use disjoint_core::DisjointSet;
//!
//! let mut set = DisjointSet::new();
//! set.make_sets(["a", "b", "c"]);
//! set.union(&"a", &"b")?;
//! assert!(set.same_set(&"a", &"b")?);
//! assert!(!set.same_set(&"a", &"c")?);
//! # Ok::<(), disjoint_core::DisjointSetError>(())
//! ```
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod dense;
pub mod disjoint_set;
pub mod error;
mod rank;
pub mod spanning;
pub mod strategy;

pub use dense::DenseDisjointSet;
pub use disjoint_set::{DisjointSet, DisjointSetBuilder};
pub use error::DisjointSetError;
pub use spanning::{SpanningForest, Weight, WeightedEdge, minimum_spanning_forest};
pub use strategy::{CompressionKind, FindCompress, FullCompression, ParentMap, PathHalving};

/// Returns the current version of the disjoint-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
