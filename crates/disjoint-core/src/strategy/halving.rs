use super::{FindCompress, ParentMap};
use crate::error::DisjointSetError;

/// Path halving.
///
/// A single pass: whenever the current node's parent is not a root, the node
/// is re-pointed at its grandparent and the walk jumps there. Each call
/// roughly halves the path instead of flattening it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathHalving;

impl FindCompress for PathHalving {
    fn resolve<M>(
        &self,
        parents: &mut M,
        element: &M::Element,
    ) -> Result<M::Element, DisjointSetError>
    where
        M: ParentMap + ?Sized,
    {
        let mut node = element.clone();
        loop {
            let parent = parents
                .parent_of(&node)
                .ok_or(DisjointSetError::ElementNotFound)?
                .clone();
            let grandparent = parents
                .parent_of(&parent)
                .ok_or(DisjointSetError::ElementNotFound)?
                .clone();
            if parent == grandparent {
                return Ok(parent);
            }
            parents.set_parent(&node, grandparent.clone());
            node = grandparent;
        }
    }
}
