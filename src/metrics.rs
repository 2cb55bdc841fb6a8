// Run metrics: comparison/swap counters and wall-clock duration

use serde::Serialize;
use std::time::Instant;

/// Counters and timing for one sorting run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub comparisons: u64,
    pub swaps: u64,
    #[serde(skip)]
    pub start_time: Option<Instant>,
    #[serde(skip)]
    pub end_time: Option<Instant>,
    /// Milliseconds between `start_time` and `end_time`
    #[serde(rename = "duration_ms")]
    pub duration: u64,
}

impl Metrics {
    /// Counters only, without timestamps (used for recorded frames)
    pub fn counts(&self) -> Metrics {
        Metrics {
            comparisons: self.comparisons,
            swaps: self.swaps,
            ..Metrics::default()
        }
    }
}

/// Accumulates [`Metrics`] for the run currently in progress
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    metrics: Metrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters and clear timestamps
    pub fn reset(&mut self) {
        self.metrics = Metrics::default();
    }

    pub fn record_comparison(&mut self) {
        self.metrics.comparisons += 1;
    }

    pub fn record_swap(&mut self) {
        self.metrics.swaps += 1;
    }

    /// Stamp the start of the run
    pub fn start(&mut self) {
        self.metrics.start_time = Some(Instant::now());
        self.metrics.end_time = None;
        self.metrics.duration = 0;
    }

    /// Stamp the end of the run and compute the duration once
    pub fn finish(&mut self) {
        let end = Instant::now();
        self.metrics.end_time = Some(end);
        // Instant is monotonic, so this never goes negative
        self.metrics.duration = self
            .metrics
            .start_time
            .map(|start| end.saturating_duration_since(start).as_millis() as u64)
            .unwrap_or(0);
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_reset() {
        let mut collector = MetricsCollector::new();
        collector.start();
        collector.record_comparison();
        collector.record_comparison();
        collector.record_swap();
        collector.finish();

        let metrics = collector.metrics();
        assert_eq!(metrics.comparisons, 2);
        assert_eq!(metrics.swaps, 1);
        assert!(metrics.start_time.is_some());
        assert!(metrics.end_time >= metrics.start_time);

        collector.reset();
        assert_eq!(collector.metrics(), Metrics::default());
    }

    #[test]
    fn test_finish_without_start_has_zero_duration() {
        let mut collector = MetricsCollector::new();
        collector.finish();
        assert_eq!(collector.metrics().duration, 0);
    }

    #[test]
    fn test_serialized_shape() {
        let mut collector = MetricsCollector::new();
        collector.record_swap();
        let json = serde_json::to_value(collector.metrics()).unwrap();
        assert_eq!(json["swaps"], 1);
        assert_eq!(json["duration_ms"], 0);
        assert!(json.get("start_time").is_none());
    }
}
