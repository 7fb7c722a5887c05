use super::{FindCompress, ParentMap};
use crate::error::DisjointSetError;

/// Full path compression.
///
/// The first pass walks parent links up to the root without writing. The
/// second pass walks the same chain again and points every visited node
/// directly at that root, so any later lookup from the path is one hop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FullCompression;

impl FindCompress for FullCompression {
    fn resolve<M>(
        &self,
        parents: &mut M,
        element: &M::Element,
    ) -> Result<M::Element, DisjointSetError>
    where
        M: ParentMap + ?Sized,
    {
        let mut root = element.clone();
        loop {
            let parent = parents
                .parent_of(&root)
                .ok_or(DisjointSetError::ElementNotFound)?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // Every node below is known to exist; nodes already pointing at the
        // root are not rewritten.
        let mut node = element.clone();
        loop {
            let next = match parents.parent_of(&node) {
                Some(parent) if *parent != root => parent.clone(),
                Some(_) | None => break,
            };
            parents.set_parent(&node, root.clone());
            node = next;
        }

        Ok(root)
    }
}
