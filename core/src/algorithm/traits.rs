//! Core algorithm trait definitions for Waypoint
//!
//! This module establishes the shared vocabulary of the search engines:
//! node identifiers, the algorithm catalogue, the error taxonomy and the
//! explicit search outcome every engine produces.
//!
//! # Key Design Principles
//! - Engines are stateless and borrow the graph immutably per call
//! - "No path" is a terminal outcome, never an error
//! - Deterministic behavior for a fixed graph iteration order

use std::fmt::{self, Debug, Display};
use serde::{Serialize, Deserialize};

use crate::data_structures::graph::Graph;

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Search strategies known to the benchmark harness
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    #[serde(rename = "BFS")]
    BreadthFirst,
    #[serde(rename = "DFS")]
    DepthFirst,
    #[serde(rename = "A*")]
    AStar,
}

impl AlgorithmKind {
    /// Every strategy, in the order "all" runs them
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::BreadthFirst,
        AlgorithmKind::DepthFirst,
        AlgorithmKind::AStar,
    ];

    /// Short identifier shown to users
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::AStar => "A*",
        }
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comprehensive error types for algorithm operations
#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Start and goal must differ: {0}")]
    SameNode(String),

    #[error("Invalid graph state: {0}")]
    InvalidGraph(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid map configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Terminal outcome of a single engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Complete path from start to goal, both inclusive
    Found(Vec<NodeId>),
    /// Search space exhausted without reaching the goal
    PathNotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            Self::Found(path) => Some(path.as_slice()),
            Self::PathNotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<NodeId>> {
        match self {
            Self::Found(path) => Some(path),
            Self::PathNotFound => None,
        }
    }
}

/// Pathfinding algorithm trait
///
/// # Invariants
/// - Thread-safe execution
/// - No state retained between calls
/// - Deterministic behavior for given inputs
pub trait PathfindingAlgorithm: Debug + Send + Sync {
    /// Returns the algorithm's catalogue entry
    fn kind(&self) -> AlgorithmKind;

    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Finds a path between two nodes of `graph`
    ///
    /// Calling with `start == goal` yields the single-node path `[start]`.
    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
    ) -> Result<SearchOutcome, AlgorithmError>;

    /// Returns whether the algorithm guarantees minimum-cost paths
    fn guarantees_optimal_path(&self) -> bool;

    /// Returns the heuristic function used (if applicable)
    fn heuristic_description(&self) -> Option<String> {
        None
    }
}
