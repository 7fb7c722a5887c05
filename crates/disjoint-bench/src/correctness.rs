//! Invariant checkers comparing union-find results against `petgraph`.

use std::collections::HashMap;

use disjoint_core::{DisjointSet, FindCompress, SpanningForest};
use petgraph::algo::{connected_components, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::Workload;

/// Builds the undirected graph whose edges are the workload's unions.
pub fn union_graph(workload: &Workload) -> UnGraph<(), u32> {
    let mut graph = UnGraph::with_capacity(workload.num_elements, workload.edges.len());
    for _ in 0..workload.num_elements {
        graph.add_node(());
    }
    for edge in &workload.edges {
        graph.add_edge(NodeIndex::new(edge.from), NodeIndex::new(edge.to), edge.weight);
    }
    graph
}

/// Verifies that `set` partitions the workload the way its graph does:
/// same number of components, and both ends of every union share a root.
pub fn check_partition<C: FindCompress>(
    workload: &Workload,
    set: &mut DisjointSet<usize, C>,
) -> Result<(), String> {
    if set.len() != workload.num_elements {
        return Err(format!(
            "element count mismatch: set={}, workload={}",
            set.len(),
            workload.num_elements
        ));
    }
    let expected = connected_components(&union_graph(workload));
    if set.set_count() != expected {
        return Err(format!(
            "component count mismatch: set={}, petgraph={expected}",
            set.set_count()
        ));
    }
    for &(a, b) in &workload.unions {
        let joined = set.same_set(&a, &b).map_err(|e| e.to_string())?;
        if !joined {
            return Err(format!("{a} and {b} were unioned but have different roots"));
        }
    }
    Ok(())
}

/// Verifies the rank bound: a root of rank `r` has at least `2^r` members.
pub fn check_rank_bound<C: FindCompress>(set: &mut DisjointSet<usize, C>) -> Result<(), String> {
    let groups: HashMap<usize, Vec<usize>> = set.groups().map_err(|e| e.to_string())?;
    for (root, members) in &groups {
        let rank = set
            .rank(root)
            .ok_or_else(|| format!("root {root} has no rank"))?;
        let floor = 1usize.checked_shl(rank).unwrap_or(usize::MAX);
        if floor > members.len() {
            return Err(format!(
                "root {root} has rank {rank} but only {} members",
                members.len()
            ));
        }
    }
    Ok(())
}

/// Verifies that `forest` has the weight, component count, and edge count of
/// `petgraph`'s minimum spanning forest over the same graph.
pub fn check_spanning_forest(
    workload: &Workload,
    forest: &SpanningForest<usize, u32>,
) -> Result<(), String> {
    let graph = union_graph(workload);
    let expected: u32 = min_spanning_tree(&graph)
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum();
    if forest.total_weight != expected {
        return Err(format!(
            "total weight mismatch: forest={}, petgraph={expected}",
            forest.total_weight
        ));
    }
    let components = connected_components(&graph);
    if forest.components != components {
        return Err(format!(
            "component count mismatch: forest={}, petgraph={components}",
            forest.components
        ));
    }
    if forest.edges.len() + components != workload.num_elements {
        return Err(format!(
            "forest has {} edges, expected {}",
            forest.edges.len(),
            workload.num_elements - components
        ));
    }
    Ok(())
}
