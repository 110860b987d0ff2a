//! Waypoint core
//!
//! Compares three route search strategies over a small weighted map of named
//! locations: uninformed breadth-first and depth-first search, and A* guided
//! by straight-line distance. For each strategy the harness reports the path,
//! its road distance and the wall-clock time taken.
//!
//! ```no_run
//! use waypoint_core::{search, Graph, Selector};
//!
//! # fn main() -> Result<(), waypoint_core::AlgorithmError> {
//! let graph = Graph::romania()?;
//! for result in search(&graph, Selector::All, "Arad", "Bucharest")? {
//!     println!("{}\n", result);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod execution;

pub use crate::algorithm::{
    heuristic, AStar, AlgorithmError, AlgorithmKind, BreadthFirstSearch, DepthFirstSearch,
    Heuristic, NodeId, PathfindingAlgorithm, SearchOutcome, StraightLineDistance,
};
pub use crate::config::{LocationConfig, MapConfig};
pub use crate::data_structures::{Graph, Position, Weight};
pub use crate::execution::{cost_series, search, Benchmark, SearchResult, Selector};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
