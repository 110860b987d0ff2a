//! Route search engines
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod astar;
pub mod bfs;
pub mod dfs;

pub use self::astar::AStar;
pub use self::bfs::BreadthFirstSearch;
pub use self::dfs::DepthFirstSearch;
