//! Waypoint Algorithm Framework
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod heuristic;
pub mod path_finding;

pub use self::traits::*;
pub use self::heuristic::{heuristic, Heuristic, StraightLineDistance};
pub use self::path_finding::*;
