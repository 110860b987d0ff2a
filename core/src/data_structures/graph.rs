//! Immutable weighted location graph
//!
//! Nodes are named locations addressed by dense [`NodeId`]s. Each node keeps
//! its neighbors in configuration order together with the road distance,
//! and optionally a [`Position`] for straight-line estimates.
//!
//! # Invariants
//! - Every edge is stored in both directions with the same weight
//! - Weights are strictly positive
//! - The graph is never mutated after [`Graph::from_config`] returns

use std::collections::{HashMap, HashSet};

use serde::{Serialize, Deserialize};

use crate::algorithm::traits::{NodeId, AlgorithmError};
use crate::config::MapConfig;

/// Road distance between two adjacent locations
pub type Weight = u32;

/// 2D position with double-precision coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.squared_distance_to(other).sqrt()
    }

    #[inline]
    pub fn squared_distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Read-only weighted undirected graph
#[derive(Debug, Clone)]
pub struct Graph {
    /// Node names indexed by `NodeId`
    names: Vec<String>,

    /// Reverse lookup from name to id
    index: HashMap<String, NodeId>,

    /// Outgoing edges per node, in configuration order
    adjacency: Vec<Vec<(NodeId, Weight)>>,

    positions: Vec<Option<Position>>,
}

impl Graph {
    /// Builds and validates a graph from its configuration
    pub fn from_config(config: &MapConfig) -> Result<Self, AlgorithmError> {
        let mut names = Vec::with_capacity(config.locations.len());
        let mut index = HashMap::with_capacity(config.locations.len());
        let mut positions = Vec::with_capacity(config.locations.len());

        for (i, location) in config.locations.iter().enumerate() {
            if location.name.is_empty() {
                return Err(AlgorithmError::InvalidGraph(format!(
                    "location {} has an empty name",
                    i
                )));
            }
            if index.insert(location.name.clone(), NodeId(i)).is_some() {
                return Err(AlgorithmError::InvalidGraph(format!(
                    "duplicate location {}",
                    location.name
                )));
            }
            names.push(location.name.clone());
            positions.push(location.position);
        }

        let mut adjacency = Vec::with_capacity(names.len());
        for location in &config.locations {
            let mut edges = Vec::with_capacity(location.neighbors.len());
            let mut seen = HashSet::with_capacity(location.neighbors.len());

            for (neighbor, weight) in &location.neighbors {
                let target = *index.get(neighbor).ok_or_else(|| {
                    AlgorithmError::InvalidGraph(format!(
                        "{} lists unknown neighbor {}",
                        location.name, neighbor
                    ))
                })?;
                if *weight == 0 {
                    return Err(AlgorithmError::InvalidGraph(format!(
                        "road {} -> {} must have a positive distance",
                        location.name, neighbor
                    )));
                }
                if neighbor == &location.name {
                    return Err(AlgorithmError::InvalidGraph(format!(
                        "{} lists itself as a neighbor",
                        location.name
                    )));
                }
                if !seen.insert(target) {
                    return Err(AlgorithmError::InvalidGraph(format!(
                        "road {} -> {} listed twice",
                        location.name, neighbor
                    )));
                }
                edges.push((target, *weight));
            }
            adjacency.push(edges);
        }

        let graph = Self {
            names,
            index,
            adjacency,
            positions,
        };
        graph.validate()?;

        log::debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// The bundled Romania road map
    pub fn romania() -> Result<Self, AlgorithmError> {
        Self::from_config(&MapConfig::romania()?)
    }

    /// Checks the symmetry invariant
    fn validate(&self) -> Result<(), AlgorithmError> {
        for (source, edges) in self.adjacency.iter().enumerate() {
            for &(target, weight) in edges {
                match self.weight_between(target, NodeId(source)) {
                    Some(back) if back == weight => {}
                    Some(back) => {
                        return Err(AlgorithmError::InvalidGraph(format!(
                            "road {} -> {} is {} but {} -> {} is {}",
                            self.names[source],
                            self.names[target.0],
                            weight,
                            self.names[target.0],
                            self.names[source],
                            back
                        )))
                    }
                    None => {
                        return Err(AlgorithmError::InvalidGraph(format!(
                            "road {} -> {} has no reverse entry",
                            self.names[source], self.names[target.0]
                        )))
                    }
                }
            }
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// All location names in configuration order
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.names.len()).map(NodeId)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resolves a location name
    pub fn node_id(&self, name: &str) -> Result<NodeId, AlgorithmError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| AlgorithmError::NodeNotFound(name.to_owned()))
    }

    pub fn name(&self, id: NodeId) -> Result<&str, AlgorithmError> {
        self.names
            .get(id.0)
            .map(String::as_str)
            .ok_or_else(|| AlgorithmError::NodeNotFound(id.to_string()))
    }

    /// Fails with `NodeNotFound` unless `id` belongs to this graph
    pub fn ensure_node(&self, id: NodeId) -> Result<(), AlgorithmError> {
        self.name(id).map(|_| ())
    }

    /// Outgoing edges of `id` in iteration order
    pub fn edges(&self, id: NodeId) -> Result<&[(NodeId, Weight)], AlgorithmError> {
        self.adjacency
            .get(id.0)
            .map(Vec::as_slice)
            .ok_or_else(|| AlgorithmError::NodeNotFound(id.to_string()))
    }

    /// Neighbor names and distances of the named location
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, Weight)>, AlgorithmError> {
        let id = self.node_id(name)?;
        Ok(self.adjacency[id.0]
            .iter()
            .map(|&(target, weight)| (self.names[target.0].as_str(), weight))
            .collect())
    }

    /// Distance between two named locations, `None` when not adjacent
    pub fn weight(&self, from: &str, to: &str) -> Result<Option<Weight>, AlgorithmError> {
        let from = self.node_id(from)?;
        let to = self.node_id(to)?;
        Ok(self.weight_between(from, to))
    }

    pub fn weight_between(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.adjacency
            .get(from.0)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|&(_, weight)| weight)
    }

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.positions.get(id.0).copied().flatten()
    }

    /// Sum of edge weights along `path`
    ///
    /// A single-node path costs zero. Consecutive nodes that are not
    /// adjacent make the path invalid.
    pub fn path_cost(&self, path: &[NodeId]) -> Result<u64, AlgorithmError> {
        path.windows(2).try_fold(0_u64, |total, pair| {
            let weight = self.weight_between(pair[0], pair[1]).ok_or_else(|| {
                AlgorithmError::InvalidGraph(format!(
                    "{} and {} are not adjacent",
                    pair[0], pair[1]
                ))
            })?;
            Ok(total + u64::from(weight))
        })
    }

    /// Translates a path of ids into location names
    pub fn path_names(&self, path: &[NodeId]) -> Result<Vec<String>, AlgorithmError> {
        path.iter()
            .map(|&id| self.name(id).map(str::to_owned))
            .collect()
    }
}
