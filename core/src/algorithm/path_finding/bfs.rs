//! Breadth-first search
//!
//! Level-order exploration over the unweighted view of the graph. Returns a
//! path with the fewest edges; road distances are ignored while searching.
//!
//! # Complexity
//! - Time: O(V + E) node visits, each carrying a copy of its path
//! - Space: O(V) frontier entries

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use crate::algorithm::traits::{
    AlgorithmError, AlgorithmKind, NodeId, PathfindingAlgorithm, SearchOutcome,
};
use crate::data_structures::graph::Graph;

#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self
    }
}

impl PathfindingAlgorithm for BreadthFirstSearch {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::BreadthFirst
    }

    fn name(&self) -> &'static str {
        "Breadth-First Search"
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<SearchOutcome, AlgorithmError> {
        graph.ensure_node(start)?;
        graph.ensure_node(goal)?;
        debug!("BFS from {} to {}", graph.name(start)?, graph.name(goal)?);

        // Nodes are marked when enqueued so no node enters the frontier twice
        let mut visited = HashSet::from([start]);
        let mut frontier = VecDeque::from([(start, vec![start])]);

        while let Some((current, path)) = frontier.pop_front() {
            if current == goal {
                debug!("BFS reached goal after {} hops", path.len() - 1);
                return Ok(SearchOutcome::Found(path));
            }

            trace!("BFS expanding {} at depth {}", current, path.len() - 1);
            for &(neighbor, _) in graph.edges(current)? {
                if visited.insert(neighbor) {
                    let mut next = path.clone();
                    next.push(neighbor);
                    frontier.push_back((neighbor, next));
                }
            }
        }

        debug!("BFS exhausted {} nodes without reaching goal", visited.len());
        Ok(SearchOutcome::PathNotFound)
    }

    fn guarantees_optimal_path(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LocationConfig, MapConfig};

    fn find(graph: &Graph, start: &str, goal: &str) -> SearchOutcome {
        let start = graph.node_id(start).unwrap();
        let goal = graph.node_id(goal).unwrap();
        BreadthFirstSearch::new().find_path(graph, start, goal).unwrap()
    }

    #[test]
    fn test_bfs_prefers_fewest_edges() {
        let graph = Graph::romania().unwrap();
        let path = find(&graph, "Arad", "Bucharest").into_path().unwrap();

        assert_eq!(path.len() - 1, 3);
        assert_eq!(
            graph.path_names(&path).unwrap(),
            vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]
        );
        assert_eq!(graph.path_cost(&path).unwrap(), 450);
    }

    #[test]
    fn test_bfs_same_node_returns_single_node_path() {
        let graph = Graph::romania().unwrap();
        let oradea = graph.node_id("Oradea").unwrap();
        assert_eq!(find(&graph, "Oradea", "Oradea"), SearchOutcome::Found(vec![oradea]));
    }

    #[test]
    fn test_bfs_ignores_weights() {
        // A-B-C is cheap, A-C is expensive but a single hop
        let config = MapConfig {
            locations: vec![
                LocationConfig::new("A").road("B", 1).road("C", 100),
                LocationConfig::new("B").road("A", 1).road("C", 1),
                LocationConfig::new("C").road("B", 1).road("A", 100),
            ],
        };
        let graph = Graph::from_config(&config).unwrap();
        let path = find(&graph, "A", "C").into_path().unwrap();
        assert_eq!(graph.path_names(&path).unwrap(), vec!["A", "C"]);
    }

    #[test]
    fn test_bfs_unreachable_goal() {
        let config = MapConfig {
            locations: vec![
                LocationConfig::new("A").road("B", 2),
                LocationConfig::new("B").road("A", 2),
                LocationConfig::new("Island"),
            ],
        };
        let graph = Graph::from_config(&config).unwrap();
        assert_eq!(find(&graph, "A", "Island"), SearchOutcome::PathNotFound);
    }

    #[test]
    fn test_bfs_rejects_foreign_ids() {
        let graph = Graph::romania().unwrap();
        let result = BreadthFirstSearch::new().find_path(&graph, NodeId(0), NodeId(500));
        assert!(matches!(result, Err(AlgorithmError::NodeNotFound(_))));
    }
}
