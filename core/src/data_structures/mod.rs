//! Graph storage and frontier structures
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod priority_queue;

pub use self::graph::{Graph, Position, Weight};
pub use self::priority_queue::{FloatOrd, MinPriorityQueue};
