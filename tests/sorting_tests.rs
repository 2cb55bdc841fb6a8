// Integration tests for the instrumented sorting runners

use std::time::Duration;

use sortty::metrics::MetricsCollector;
use sortty::scheduler::{CancelToken, SleepScheduler};
use sortty::sorting::errors::SortError;
use sortty::sorting::{self, AlgorithmKey, NoopObserver, SortContext};
use sortty::store::{ArrayStore, ElementState, ElementTag};

fn sort_with(key: AlgorithmKey, values: &[u32]) -> (Vec<u32>, sortty::metrics::Metrics) {
    let mut store = ArrayStore::from_values(values);
    let metrics = sorting::run(&mut store, key, NoopObserver).expect("run failed");
    (store.to_values(), metrics)
}

#[test]
fn test_bubble_sort_small_array() {
    let (values, metrics) = sort_with(AlgorithmKey::BubbleSort, &[5, 3, 8, 1]);
    assert_eq!(values, vec![1, 3, 5, 8]);
    // 3 + 2 + 1 pair visits, one swap per inversion
    assert_eq!(metrics.comparisons, 6);
    assert_eq!(metrics.swaps, 4);
}

#[test]
fn test_empty_array_for_every_algorithm() {
    for key in AlgorithmKey::ALL {
        let mut events = 0;
        let mut store = ArrayStore::new();
        let observer = |_: usize, _: &ElementState| events += 1;
        let metrics = sorting::run(&mut store, key, observer).unwrap();
        assert!(store.is_empty(), "{}", key);
        assert_eq!(metrics.comparisons, 0, "{}", key);
        assert_eq!(metrics.swaps, 0, "{}", key);
        assert_eq!(events, 0, "{}", key);
    }
}

#[test]
fn test_bucket_sort_all_equal_values() {
    let (values, metrics) = sort_with(AlgorithmKey::BucketSort, &[4, 4, 4, 4]);
    assert_eq!(values, vec![4, 4, 4, 4]);
    assert_eq!(metrics.comparisons, 0);
}

#[test]
fn test_radix_sort_mixed_digit_counts() {
    let (values, _) = sort_with(AlgorithmKey::RadixSort, &[170, 45, 75, 90, 802, 24, 2, 66]);
    assert_eq!(values, vec![2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn test_every_algorithm_sorts_and_releases_highlights() {
    let inputs: [&[u32]; 5] = [
        &[9, 1, 8, 2, 7, 3, 6, 4, 5],
        &[1, 2, 3, 4, 5, 6],
        &[6, 5, 4, 3, 2, 1],
        &[3, 3, 1, 1, 2, 2, 0],
        &[999, 60],
    ];

    for key in AlgorithmKey::ALL {
        for input in inputs {
            let mut store = ArrayStore::from_values(input);
            sorting::run(&mut store, key, NoopObserver).unwrap();

            let mut expected = input.to_vec();
            expected.sort_unstable();
            assert_eq!(store.to_values(), expected, "{} on {:?}", key, input);
            assert!(
                store.selected_indices().is_empty(),
                "{} left slots selected on {:?}",
                key,
                input
            );
        }
    }
}

#[test]
fn test_step_stream_replays_to_final_state() {
    let input = [42, 7, 19, 3, 88, 7, 56];
    for key in AlgorithmKey::ALL {
        let mut replay: Vec<ElementState> = input.iter().copied().map(ElementState::idle).collect();
        let mut store = ArrayStore::from_values(&input);
        sorting::run(&mut store, key, |index: usize, element: &ElementState| {
            replay[index] = *element;
        })
        .unwrap();
        assert_eq!(replay.as_slice(), store.elements(), "{}", key);
    }
}

#[test]
fn test_only_instrumented_runners_count() {
    let input = [5, 2, 9, 1, 7];
    for key in AlgorithmKey::ALL {
        let (_, metrics) = sort_with(key, &input);
        if key.records_metrics() {
            assert!(metrics.comparisons > 0, "{}", key);
            assert!(metrics.swaps > 0, "{}", key);
        } else {
            assert_eq!((metrics.comparisons, metrics.swaps), (0, 0), "{}", key);
        }
    }
}

#[test]
fn test_sorted_input_needs_no_swaps() {
    let (_, bubble) = sort_with(AlgorithmKey::BubbleSort, &[1, 2, 3, 4, 5]);
    assert_eq!(bubble.swaps, 0);
    assert_eq!(bubble.comparisons, 10);

    let (_, selection) = sort_with(AlgorithmKey::SelectionSort, &[1, 2, 3, 4, 5]);
    assert_eq!(selection.swaps, 0);
    assert_eq!(selection.comparisons, 10);
}

#[test]
fn test_metrics_reset_between_runs() {
    let mut store = ArrayStore::from_values(&[4, 3, 2, 1]);
    let first = sorting::run(&mut store, AlgorithmKey::BubbleSort, NoopObserver).unwrap();
    assert_eq!(first.swaps, 6);

    // Second run on the now-sorted store starts from zero again
    let second = sorting::run(&mut store, AlgorithmKey::BubbleSort, NoopObserver).unwrap();
    assert_eq!(second.comparisons, 6);
    assert_eq!(second.swaps, 0);
    assert!(second.end_time.is_some());
}

#[test]
fn test_cancelled_paced_run_stops_cleanly() {
    let token = CancelToken::new();
    token.cancel();

    let mut store = ArrayStore::from_values(&[5, 4, 3, 2, 1]);
    let mut metrics = MetricsCollector::new();
    let mut scheduler = SleepScheduler::new(token);
    let mut observer = NoopObserver;
    let result = SortContext::new(
        &mut store,
        &mut metrics,
        &mut scheduler,
        &mut observer,
        Duration::from_millis(250),
    )
    .execute(AlgorithmKey::QuickSort);

    assert_eq!(result, Err(SortError::Cancelled));
    assert!(store
        .elements()
        .iter()
        .all(|e| e.state == ElementTag::Idle));

    assert_eq!(store.to_values(), vec![5, 4, 3, 2, 1]);
}
