//! A* search
//!
//! Best-first search ordered by `f = g + h`, where `g` is the road distance
//! travelled so far and `h` is a [`Heuristic`] estimate of the distance left.
//! The first time the goal is popped its path is minimum-cost, provided the
//! heuristic never overestimates.
//!
//! # Tie-breaking
//! Frontier entries with equal `f` pop in lexicographic order of node name,
//! then in insertion order. Results are therefore reproducible for a fixed
//! graph.

use std::collections::HashMap;

use log::{debug, trace};

use crate::algorithm::heuristic::{Heuristic, StraightLineDistance};
use crate::algorithm::traits::{
    AlgorithmError, AlgorithmKind, NodeId, PathfindingAlgorithm, SearchOutcome,
};
use crate::data_structures::graph::Graph;
use crate::data_structures::priority_queue::{FloatOrd, MinPriorityQueue};

#[derive(Debug)]
struct FrontierEntry {
    node: NodeId,
    g: u64,
    path: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct AStar<H = StraightLineDistance> {
    heuristic: H,
}

impl AStar {
    pub fn new() -> Self {
        Self::with_heuristic(StraightLineDistance)
    }
}

impl<H: Heuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<H: Heuristic> PathfindingAlgorithm for AStar<H> {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::AStar
    }

    fn name(&self) -> &'static str {
        "A* Search"
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<SearchOutcome, AlgorithmError> {
        graph.ensure_node(start)?;
        graph.ensure_node(goal)?;
        debug!("A* from {} to {}", graph.name(start)?, graph.name(goal)?);

        let mut best_g: HashMap<NodeId, u64> = HashMap::from([(start, 0)]);
        let mut frontier = MinPriorityQueue::with_capacity(graph.node_count());
        let mut expanded = 0_usize;

        let h = self.heuristic.estimate(graph, start, goal)?;
        frontier.push(
            (FloatOrd(h), graph.name(start)?),
            FrontierEntry { node: start, g: 0, path: vec![start] },
        );

        while let Some(((f, _), entry)) = frontier.pop() {
            // A cheaper route to this node was queued after this entry
            if best_g.get(&entry.node).is_some_and(|&known| entry.g > known) {
                continue;
            }

            if entry.node == goal {
                debug!(
                    "A* reached goal with cost {} after expanding {} nodes",
                    entry.g, expanded
                );
                return Ok(SearchOutcome::Found(entry.path));
            }

            expanded += 1;
            trace!("A* expanding {} with f = {:.3}", entry.node, f.0);

            for &(neighbor, weight) in graph.edges(entry.node)? {
                let tentative = entry.g + u64::from(weight);
                let improves = best_g
                    .get(&neighbor)
                    .map_or(true, |&known| tentative < known);
                if !improves {
                    continue;
                }

                best_g.insert(neighbor, tentative);
                let f = tentative as f64 + self.heuristic.estimate(graph, neighbor, goal)?;
                let mut path = entry.path.clone();
                path.push(neighbor);
                frontier.push(
                    (FloatOrd(f), graph.name(neighbor)?),
                    FrontierEntry { node: neighbor, g: tentative, path },
                );
            }
        }

        debug!("A* exhausted frontier after expanding {} nodes", expanded);
        Ok(SearchOutcome::PathNotFound)
    }

    fn guarantees_optimal_path(&self) -> bool {
        true
    }

    fn heuristic_description(&self) -> Option<String> {
        Some(self.heuristic.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LocationConfig, MapConfig};

    /// Heuristic that knows nothing, reducing A* to uniform-cost search
    #[derive(Debug)]
    struct Zero;

    impl Heuristic for Zero {
        fn estimate(&self, _: &Graph, _: NodeId, _: NodeId) -> Result<f64, AlgorithmError> {
            Ok(0.0)
        }

        fn description(&self) -> String {
            "zero".into()
        }
    }

    fn find(graph: &Graph, start: &str, goal: &str) -> SearchOutcome {
        let start = graph.node_id(start).unwrap();
        let goal = graph.node_id(goal).unwrap();
        AStar::new().find_path(graph, start, goal).unwrap()
    }

    #[test]
    fn test_astar_finds_classic_optimum() {
        let graph = Graph::romania().unwrap();
        let path = find(&graph, "Arad", "Bucharest").into_path().unwrap();

        assert_eq!(
            graph.path_names(&path).unwrap(),
            vec!["Arad", "Sibiu", "Rimnicu", "Pitesti", "Bucharest"]
        );
        assert_eq!(graph.path_cost(&path).unwrap(), 418);
    }

    #[test]
    fn test_astar_same_node_returns_single_node_path() {
        let graph = Graph::romania().unwrap();
        let path = find(&graph, "Arad", "Arad").into_path().unwrap();
        assert_eq!(graph.path_names(&path).unwrap(), vec!["Arad"]);
    }

    #[test]
    fn test_astar_tie_break_by_name() {
        // Two equal-cost routes; "Left" sorts before "Right"
        let config = MapConfig {
            locations: vec![
                LocationConfig::new("S").road("Right", 1).road("Left", 1),
                LocationConfig::new("Right").road("S", 1).road("G", 1),
                LocationConfig::new("Left").road("S", 1).road("G", 1),
                LocationConfig::new("G").road("Right", 1).road("Left", 1),
            ],
        };
        let graph = Graph::from_config(&config).unwrap();
        let engine = AStar::with_heuristic(Zero);
        let start = graph.node_id("S").unwrap();
        let goal = graph.node_id("G").unwrap();

        for _ in 0..5 {
            let path = engine.find_path(&graph, start, goal).unwrap().into_path().unwrap();
            assert_eq!(graph.path_names(&path).unwrap(), vec!["S", "Left", "G"]);
        }
    }

    #[test]
    fn test_astar_reopens_cheaper_route() {
        // Direct road is one hop but long; detour is cheaper
        let config = MapConfig {
            locations: vec![
                LocationConfig::new("A").road("G", 10).road("B", 2),
                LocationConfig::new("B").road("A", 2).road("C", 2),
                LocationConfig::new("C").road("B", 2).road("G", 2),
                LocationConfig::new("G").road("A", 10).road("C", 2),
            ],
        };
        let graph = Graph::from_config(&config).unwrap();
        let start = graph.node_id("A").unwrap();
        let goal = graph.node_id("G").unwrap();
        let path = AStar::with_heuristic(Zero)
            .find_path(&graph, start, goal)
            .unwrap()
            .into_path()
            .unwrap();

        assert_eq!(graph.path_names(&path).unwrap(), vec!["A", "B", "C", "G"]);
        assert_eq!(graph.path_cost(&path).unwrap(), 6);
    }

    #[test]
    fn test_astar_unreachable_goal() {
        let config = MapConfig {
            locations: vec![
                LocationConfig::new("A").at(0.0, 0.0).road("B", 1),
                LocationConfig::new("B").at(1.0, 0.0).road("A", 1),
                LocationConfig::new("Island").at(5.0, 5.0),
            ],
        };
        let graph = Graph::from_config(&config).unwrap();
        assert_eq!(find(&graph, "A", "Island"), SearchOutcome::PathNotFound);
    }

    #[test]
    fn test_astar_missing_position_is_error() {
        let config = MapConfig {
            locations: vec![
                LocationConfig::new("A").at(0.0, 0.0).road("B", 1),
                LocationConfig::new("B").road("A", 1),
            ],
        };
        let graph = Graph::from_config(&config).unwrap();
        let result = AStar::new().find_path(&graph, NodeId(0), NodeId(1));
        assert!(matches!(result, Err(AlgorithmError::NodeNotFound(_))));
    }

    #[test]
    fn test_astar_metadata() {
        let engine = AStar::new();
        assert_eq!(engine.kind(), AlgorithmKind::AStar);
        assert!(engine.guarantees_optimal_path());
        assert!(engine.heuristic_description().unwrap().contains("straight-line"));
    }
}
