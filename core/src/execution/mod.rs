//! Execution harness: timing and engine comparison
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod benchmark;
pub mod profiler;

pub use self::benchmark::{cost_series, engine_for, search, Benchmark, SearchResult, Selector};
pub use self::profiler::AlgorithmProfiler;
