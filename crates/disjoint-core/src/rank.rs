//! Union-by-rank link decision shared by the hashed and dense containers.
use std::cmp::Ordering;

/// Which of two distinct roots ends up under the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    /// The second root becomes the parent of the first. When `promote` is
    /// set the ranks were equal and the second root's rank grows by one.
    FirstUnderSecond { promote: bool },
    /// The first root becomes the parent of the second.
    SecondUnderFirst,
}

/// Decides how to link two roots of rank `first` and `second`.
///
/// The strictly higher rank wins. On a tie the **second** root becomes the
/// parent, so results are reproducible given the argument order of `union`.
pub(crate) fn link_by_rank(first: u32, second: u32) -> Link {
    match first.cmp(&second) {
        Ordering::Greater => Link::SecondUnderFirst,
        Ordering::Equal => Link::FirstUnderSecond { promote: true },
        Ordering::Less => Link::FirstUnderSecond { promote: false },
    }
}
