//! Benchmark harness comparing search engines on one route
//!
//! Each selected engine runs exactly once, timed in isolation. Reported cost
//! is always recomputed from the graph's road distances, so engines that do
//! not track cost themselves still produce comparable numbers.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};
use serde::{Serialize, Serializer};

use crate::algorithm::path_finding::{AStar, BreadthFirstSearch, DepthFirstSearch};
use crate::algorithm::traits::{AlgorithmError, AlgorithmKind, PathfindingAlgorithm};
use crate::data_structures::graph::Graph;
use crate::execution::profiler::AlgorithmProfiler;

/// Which engines a benchmark run invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Only(AlgorithmKind),
    All,
}

impl Selector {
    /// Engines to run, in execution order
    pub fn algorithms(self) -> Vec<AlgorithmKind> {
        match self {
            Self::Only(kind) => vec![kind],
            Self::All => AlgorithmKind::ALL.to_vec(),
        }
    }
}

impl From<AlgorithmKind> for Selector {
    fn from(kind: AlgorithmKind) -> Self {
        Self::Only(kind)
    }
}

impl FromStr for Selector {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Only(AlgorithmKind::BreadthFirst)),
            "dfs" => Ok(Self::Only(AlgorithmKind::DepthFirst)),
            "a*" | "astar" | "a-star" => Ok(Self::Only(AlgorithmKind::AStar)),
            "all" => Ok(Self::All),
            _ => Err(AlgorithmError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Engine implementing `kind`
pub fn engine_for(kind: AlgorithmKind) -> Box<dyn PathfindingAlgorithm> {
    match kind {
        AlgorithmKind::BreadthFirst => Box::new(BreadthFirstSearch::new()),
        AlgorithmKind::DepthFirst => Box::new(DepthFirstSearch::new()),
        AlgorithmKind::AStar => Box::new(AStar::new()),
    }
}

/// Outcome of one engine on one route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub algorithm: AlgorithmKind,

    /// Location names from start to goal, `None` when no path exists
    pub path: Option<Vec<String>>,

    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,

    /// Sum of road distances along `path`; present exactly when `path` is
    pub cost: Option<u64>,
}

fn serialize_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Number of roads travelled
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.algorithm)?;
        match &self.path {
            Some(path) => writeln!(f, "path: {}", path.join(" -> "))?,
            None => writeln!(f, "path: not found")?,
        }
        writeln!(f, "time: {:.4} s", self.elapsed_seconds())?;
        match self.cost {
            Some(cost) => write!(f, "path cost: {}", cost),
            None => write!(f, "path cost: n/a"),
        }
    }
}

/// Harness bound to one graph
#[derive(Debug, Clone, Copy)]
pub struct Benchmark<'g> {
    graph: &'g Graph,
}

impl<'g> Benchmark<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Runs the selected engines from `start` to `goal`
    ///
    /// Rejects `start == goal` before any lookup or search, then rejects
    /// unknown names. No engine runs unless both checks pass.
    pub fn run(
        &self,
        selector: Selector,
        start: &str,
        goal: &str,
    ) -> Result<Vec<SearchResult>, AlgorithmError> {
        if start == goal {
            return Err(AlgorithmError::SameNode(start.to_owned()));
        }
        let start_id = self.graph.node_id(start)?;
        let goal_id = self.graph.node_id(goal)?;

        selector
            .algorithms()
            .into_iter()
            .map(|kind| {
                let engine = engine_for(kind);
                let (outcome, elapsed) = AlgorithmProfiler::profile(|| {
                    engine.find_path(self.graph, start_id, goal_id)
                });

                let result = match outcome?.into_path() {
                    Some(path) => SearchResult {
                        algorithm: kind,
                        cost: Some(self.graph.path_cost(&path)?),
                        path: Some(self.graph.path_names(&path)?),
                        elapsed,
                    },
                    None => {
                        warn!("{} found no path from {} to {}", kind, start, goal);
                        SearchResult {
                            algorithm: kind,
                            path: None,
                            elapsed,
                            cost: None,
                        }
                    }
                };

                info!(
                    "{} {} -> {}: cost {:?} in {:.6} s",
                    kind,
                    start,
                    goal,
                    result.cost,
                    result.elapsed_seconds()
                );
                Ok(result)
            })
            .collect()
    }
}

/// Runs `selector` on `graph`; see [`Benchmark::run`]
pub fn search(
    graph: &Graph,
    selector: Selector,
    start: &str,
    goal: &str,
) -> Result<Vec<SearchResult>, AlgorithmError> {
    Benchmark::new(graph).run(selector, start, goal)
}

/// `(algorithm, cost)` pairs for results that found a path
pub fn cost_series(results: &[SearchResult]) -> Vec<(AlgorithmKind, u64)> {
    results
        .iter()
        .filter_map(|result| result.cost.map(|cost| (result.algorithm, cost)))
        .collect()
}
