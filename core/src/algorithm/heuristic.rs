//! Distance estimators for informed search

use std::fmt::Debug;

use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::data_structures::graph::{Graph, Position};

/// Estimate of the remaining cost from a node to the goal
pub trait Heuristic: Debug + Send + Sync {
    fn estimate(&self, graph: &Graph, node: NodeId, goal: NodeId) -> Result<f64, AlgorithmError>;

    fn description(&self) -> String;
}

/// Euclidean distance between node positions
///
/// Admissible only when positions are drawn to the same scale as the road
/// distances; no attempt is made to correct a map where they disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLineDistance;

impl Heuristic for StraightLineDistance {
    fn estimate(&self, graph: &Graph, node: NodeId, goal: NodeId) -> Result<f64, AlgorithmError> {
        let from = position_of(graph, node)?;
        let to = position_of(graph, goal)?;
        Ok(from.distance_to(&to))
    }

    fn description(&self) -> String {
        "straight-line (Euclidean) distance between map positions".to_string()
    }
}

fn position_of(graph: &Graph, id: NodeId) -> Result<Position, AlgorithmError> {
    graph.position(id).ok_or_else(|| {
        let label = graph.name(id).map_or_else(|_| id.to_string(), str::to_owned);
        AlgorithmError::NodeNotFound(format!("{} has no position", label))
    })
}

/// Straight-line distance between two named locations
pub fn heuristic(graph: &Graph, node: &str, goal: &str) -> Result<f64, AlgorithmError> {
    let node = graph.node_id(node)?;
    let goal = graph.node_id(goal)?;
    StraightLineDistance.estimate(graph, node, goal)
}
