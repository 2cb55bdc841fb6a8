//! Instrumented sorting runners
//!
//! This module provides the step-emitting sorting core:
//! - [`engine`]: [`SortContext`], which owns a run and routes every mutation
//!   to the store, the observer, and the scheduler
//! - [`algorithms`]: the eight strategies as `impl SortContext` blocks
//! - [`errors`]: [`SortError`] and the crate `Result` alias
//!
//! # Execution Model
//!
//! A runner copies the store's values into a working buffer, sorts that buffer,
//! and mirrors each visible change back into the store as a [`Step`]. After a
//! group of changes it reaches a suspension point, where the observer sees the
//! consistent intermediate snapshot and the scheduler applies the pacing delay.
//!
//! # Metrics
//!
//! Only bubble, selection, and quick sort count comparisons and swaps. The
//! other five emit steps and pauses but leave the counters at zero.
//!
//! [`Step`]: StepEvent

pub mod algorithms;
pub mod engine;
pub mod errors;

use crate::metrics::{Metrics, MetricsCollector};
use crate::scheduler::ImmediateScheduler;
use crate::store::ArrayStore;
use errors::{Result, SortError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub use engine::{NoopObserver, RunOutcome, SortContext, StepEvent, StepObserver};

/// Key selecting one of the eight runners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKey {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    RadixSort,
    BucketSort,
}

impl AlgorithmKey {
    /// All keys in table order
    pub const ALL: [AlgorithmKey; 8] = [
        AlgorithmKey::BubbleSort,
        AlgorithmKey::InsertionSort,
        AlgorithmKey::SelectionSort,
        AlgorithmKey::MergeSort,
        AlgorithmKey::QuickSort,
        AlgorithmKey::HeapSort,
        AlgorithmKey::RadixSort,
        AlgorithmKey::BucketSort,
    ];

    /// Wire key, e.g. `merge_sort`
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKey::BubbleSort => "bubble_sort",
            AlgorithmKey::InsertionSort => "insertion_sort",
            AlgorithmKey::SelectionSort => "selection_sort",
            AlgorithmKey::MergeSort => "merge_sort",
            AlgorithmKey::QuickSort => "quick_sort",
            AlgorithmKey::HeapSort => "heap_sort",
            AlgorithmKey::RadixSort => "radix_sort",
            AlgorithmKey::BucketSort => "bucket_sort",
        }
    }

    /// Whether this runner feeds the comparison/swap counters
    pub fn records_metrics(self) -> bool {
        matches!(
            self,
            AlgorithmKey::BubbleSort | AlgorithmKey::SelectionSort | AlgorithmKey::QuickSort
        )
    }

    /// Next key in table order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous key in table order, wrapping around
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AlgorithmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// Run `key` over `store` with no pacing, reporting every mutation to `observer`.
///
/// The caller must not start another run or regenerate the array until this
/// returns; the exclusive borrows enforce that within one thread.
pub fn run<O: StepObserver>(
    store: &mut ArrayStore,
    key: AlgorithmKey,
    mut observer: O,
) -> Result<Metrics> {
    run_traced(store, key, &mut observer).map(|outcome| outcome.metrics)
}

/// Like [`run`], but also returns where each original slot ended up
pub fn run_traced(
    store: &mut ArrayStore,
    key: AlgorithmKey,
    observer: &mut dyn StepObserver,
) -> Result<RunOutcome> {
    let mut metrics = MetricsCollector::new();
    let mut scheduler = ImmediateScheduler::new();
    let mut ctx = SortContext::new(store, &mut metrics, &mut scheduler, observer, Duration::ZERO);
    ctx.execute(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip_through_wire_names() {
        for key in AlgorithmKey::ALL {
            assert_eq!(key.as_str().parse::<AlgorithmKey>().unwrap(), key);
        }
        assert_eq!(
            "shell_sort".parse::<AlgorithmKey>(),
            Err(SortError::UnknownAlgorithm("shell_sort".to_string()))
        );
    }

    #[test]
    fn test_key_cycling_wraps() {
        assert_eq!(AlgorithmKey::BucketSort.next(), AlgorithmKey::BubbleSort);
        assert_eq!(AlgorithmKey::BubbleSort.prev(), AlgorithmKey::BucketSort);
        assert_eq!(AlgorithmKey::MergeSort.next(), AlgorithmKey::QuickSort);
    }

    #[test]
    fn test_metric_policy() {
        let counted: Vec<_> = AlgorithmKey::ALL
            .into_iter()
            .filter(|k| k.records_metrics())
            .collect();
        assert_eq!(
            counted,
            vec![
                AlgorithmKey::BubbleSort,
                AlgorithmKey::SelectionSort,
                AlgorithmKey::QuickSort
            ]
        );
    }
}
