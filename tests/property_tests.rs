// Property tests for the sorting runners over random arrays

use proptest::prelude::*;

use std::time::Duration;

use sortty::metrics::{Metrics, MetricsCollector};
use sortty::scheduler::{CancelToken, ImmediateScheduler};
use sortty::sorting::errors::SortError;
use sortty::sorting::{self, AlgorithmKey, NoopObserver, SortContext, StepObserver};
use sortty::store::{ArrayStore, ElementState};

fn algorithm() -> impl Strategy<Value = AlgorithmKey> {
    prop::sample::select(AlgorithmKey::ALL.to_vec())
}

/// Asserts at every suspension point that counters never decrease
#[derive(Default)]
struct MonotonicCounters {
    last: Metrics,
    pauses: usize,
    violated: bool,
}

impl StepObserver for MonotonicCounters {
    fn on_step(&mut self, _index: usize, _element: &ElementState) {}

    fn on_pause(&mut self, _store: &ArrayStore, metrics: &Metrics) -> Result<(), SortError> {
        if metrics.comparisons < self.last.comparisons || metrics.swaps < self.last.swaps {
            self.violated = true;
        }
        self.last = *metrics;
        self.pauses += 1;
        Ok(())
    }
}

/// Cancels the run once `remaining` suspension points have passed
struct CancelAt {
    token: CancelToken,
    remaining: usize,
}

impl StepObserver for CancelAt {
    fn on_step(&mut self, _index: usize, _element: &ElementState) {}

    fn on_pause(&mut self, _store: &ArrayStore, _metrics: &Metrics) -> Result<(), SortError> {
        if self.remaining == 0 {
            self.token.cancel();
        } else {
            self.remaining -= 1;
        }
        Ok(())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_is_sorted_permutation(
        key in algorithm(),
        values in prop::collection::vec(0u32..1000, 0..200)
    ) {
        let mut store = ArrayStore::from_values(&values);
        sorting::run(&mut store, key, NoopObserver).unwrap();

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(store.to_values(), expected);
        prop_assert!(store.is_sorted());
        prop_assert!(store.selected_indices().is_empty());
    }

    #[test]
    fn prop_stable_algorithms_keep_equal_order(
        key in prop::sample::select(vec![
            AlgorithmKey::BubbleSort,
            AlgorithmKey::InsertionSort,
            AlgorithmKey::MergeSort,
            AlgorithmKey::RadixSort,
            AlgorithmKey::BucketSort,
        ]),
        // Few distinct values so that ties are common
        values in prop::collection::vec(0u32..8, 0..200)
    ) {
        let mut store = ArrayStore::from_values(&values);
        let outcome = sorting::run_traced(&mut store, key, &mut NoopObserver).unwrap();

        prop_assert_eq!(outcome.order.len(), values.len());
        for pair in outcome.order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if values[a] == values[b] {
                prop_assert!(a < b, "{} reordered equal elements {} and {}", key, a, b);
            }
        }
    }

    #[test]
    fn prop_counters_never_decrease(
        key in algorithm(),
        values in prop::collection::vec(60u32..1000, 0..120)
    ) {
        let mut store = ArrayStore::from_values(&values);
        let mut observer = MonotonicCounters::default();
        let outcome = sorting::run_traced(&mut store, key, &mut observer).unwrap();

        prop_assert!(!observer.violated);
        prop_assert!(outcome.metrics.comparisons >= observer.last.comparisons);
        prop_assert!(outcome.metrics.swaps >= observer.last.swaps);
        if values.len() < 2 {
            prop_assert_eq!(observer.pauses, 0);
        }
        if !key.records_metrics() {
            prop_assert_eq!(outcome.metrics.comparisons, 0);
            prop_assert_eq!(outcome.metrics.swaps, 0);
        }
    }

    #[test]
    fn prop_order_is_a_permutation_of_indices(
        key in algorithm(),
        values in prop::collection::vec(0u32..50, 0..100)
    ) {
        let mut store = ArrayStore::from_values(&values);
        let outcome = sorting::run_traced(&mut store, key, &mut NoopObserver).unwrap();

        let mut seen = outcome.order.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..values.len()).collect::<Vec<_>>());
        for (slot, origin) in outcome.order.iter().enumerate() {
            prop_assert_eq!(store.elements()[slot].value, values[*origin]);
        }
    }

    #[test]
    fn prop_cancelled_run_leaves_input_untouched(
        key in algorithm(),
        values in prop::collection::vec(60u32..1000, 2..40),
        remaining in 0usize..60
    ) {
        let token = CancelToken::new();
        let mut store = ArrayStore::from_values(&values);
        let mut metrics = MetricsCollector::new();
        let mut scheduler = ImmediateScheduler::with_cancel(token.clone());
        let mut observer = CancelAt { token, remaining };

        let result = SortContext::new(
            &mut store,
            &mut metrics,
            &mut scheduler,
            &mut observer,
            Duration::ZERO,
        )
        .execute(key);

        match result {
            Err(SortError::Cancelled) => prop_assert_eq!(store.to_values(), values),
            Ok(_) => prop_assert!(store.is_sorted()),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
        prop_assert!(store.selected_indices().is_empty());
    }
}
