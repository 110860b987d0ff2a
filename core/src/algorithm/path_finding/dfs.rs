//! Depth-first search
//!
//! Recursive backtracking that follows neighbors in graph iteration order
//! and returns the first path that reaches the goal. The result depends on
//! that order and is neither shortest by hops nor by distance.
//!
//! One visited set is shared by every level of a single search, which bounds
//! the recursion depth by the node count.

use std::collections::HashSet;

use log::{debug, trace};

use crate::algorithm::traits::{
    AlgorithmError, AlgorithmKind, NodeId, PathfindingAlgorithm, SearchOutcome,
};
use crate::data_structures::graph::Graph;

#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self
    }

    /// Extends `path` towards `goal`; on failure `path` is left as it was
    fn explore(
        graph: &Graph,
        current: NodeId,
        goal: NodeId,
        path: &mut Vec<NodeId>,
        visited: &mut HashSet<NodeId>,
    ) -> Result<bool, AlgorithmError> {
        if current == goal {
            return Ok(true);
        }

        visited.insert(current);
        trace!("DFS entering {} at depth {}", current, path.len() - 1);

        for &(neighbor, _) in graph.edges(current)? {
            if visited.contains(&neighbor) {
                continue;
            }
            path.push(neighbor);
            if Self::explore(graph, neighbor, goal, path, visited)? {
                return Ok(true);
            }
            path.pop();
        }

        Ok(false)
    }
}

impl PathfindingAlgorithm for DepthFirstSearch {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::DepthFirst
    }

    fn name(&self) -> &'static str {
        "Depth-First Search"
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<SearchOutcome, AlgorithmError> {
        graph.ensure_node(start)?;
        graph.ensure_node(goal)?;
        debug!("DFS from {} to {}", graph.name(start)?, graph.name(goal)?);

        let mut path = vec![start];
        let mut visited = HashSet::with_capacity(graph.node_count());

        if Self::explore(graph, start, goal, &mut path, &mut visited)? {
            debug!("DFS reached goal after {} hops", path.len() - 1);
            Ok(SearchOutcome::Found(path))
        } else {
            debug!("DFS exhausted {} nodes without reaching goal", visited.len());
            Ok(SearchOutcome::PathNotFound)
        }
    }

    fn guarantees_optimal_path(&self) -> bool {
        false
    }
}
