//! Error type shared by the disjoint-set containers and the root-find
//! strategies.
//!
//! Every variant is a caller-contract violation rather than a transient
//! condition, and nothing here is retried.
//!
//! `make_set`, `union` and the builder leave both mappings untouched when
//! they fail. `find` follows the [`crate::FindCompress`] contract instead: on
//! well-formed state an unregistered element fails before any write, but on
//! injected state with a dangling parent [`crate::PathHalving`] may already
//! have re-pointed nodes it walked past. Those nodes keep their roots.

/// All error conditions raised by [`crate::DisjointSet`],
/// [`crate::DenseDisjointSet`] and the [`crate::FindCompress`] strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisjointSetError {
    /// A required element argument was `None`.
    #[error("element argument `{argument}` is absent")]
    NullElement {
        /// Name of the argument that was absent.
        argument: &'static str,
    },

    /// The element was never registered through `make_set`.
    #[error("element not found in the disjoint set")]
    ElementNotFound,

    /// The selected edge weights of a spanning forest add up to more than
    /// the weight type can hold.
    #[error("total spanning forest weight overflows its type")]
    WeightOverflow,

    /// The container was configured with incomplete state.
    #[error("invalid disjoint set configuration: missing {missing}")]
    InvalidConfiguration {
        /// Description of the missing piece of state.
        missing: &'static str,
    },
}
