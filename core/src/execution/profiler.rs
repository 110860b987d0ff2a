//! Wall-clock measurement around engine invocations

use std::time::{Duration, Instant};

/// Stopwatch for a single measured section
#[derive(Debug, Clone, Default)]
pub struct AlgorithmProfiler {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl AlgorithmProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stops the running measurement and returns its duration
    ///
    /// Stopping a profiler that was never started leaves the last reading.
    pub fn stop(&mut self) -> Duration {
        if let Some(start) = self.start_time.take() {
            self.elapsed = start.elapsed();
        }
        self.elapsed
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Runs `f` and measures it, whatever it returns
    pub fn profile<T>(f: impl FnOnce() -> T) -> (T, Duration) {
        let mut profiler = Self::new();
        profiler.start();
        let value = f();
        let elapsed = profiler.stop();
        (value, elapsed)
    }
}
