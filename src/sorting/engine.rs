// Run context shared by all sorting runners

use super::AlgorithmKey;
use super::errors::Result;
use crate::metrics::{Metrics, MetricsCollector};
use crate::scheduler::StepScheduler;
use crate::store::{ArrayStore, ElementState, ElementUpdate};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// One observable mutation of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    pub index: usize,
    pub element: ElementState,
}

/// Subscriber for the step stream (renderers, audio cues, recorders)
pub trait StepObserver {
    /// Called synchronously after every slot mutation
    fn on_step(&mut self, index: usize, element: &ElementState);

    /// Called at each suspension point, before the scheduler pauses
    fn on_pause(&mut self, _store: &ArrayStore, _metrics: &Metrics) -> Result<()> {
        Ok(())
    }
}

impl<F> StepObserver for F
where
    F: FnMut(usize, &ElementState),
{
    fn on_step(&mut self, index: usize, element: &ElementState) {
        self(index, element)
    }
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _index: usize, _element: &ElementState) {}
}

/// Element of a runner's working buffer: the value plus the slot it started in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tracked {
    pub value: u32,
    pub origin: usize,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub metrics: Metrics,
    /// `order[k]` is the original index of the element now in slot `k`
    pub order: Vec<usize>,
}

/// Exclusive handle on the store, metrics, scheduler, and observer for one run
pub struct SortContext<'a> {
    store: &'a mut ArrayStore,
    metrics: &'a mut MetricsCollector,
    scheduler: &'a mut dyn StepScheduler,
    observer: &'a mut dyn StepObserver,
    delay: Duration,
}

impl<'a> SortContext<'a> {
    pub fn new(
        store: &'a mut ArrayStore,
        metrics: &'a mut MetricsCollector,
        scheduler: &'a mut dyn StepScheduler,
        observer: &'a mut dyn StepObserver,
        delay: Duration,
    ) -> Self {
        SortContext {
            store,
            metrics,
            scheduler,
            observer,
            delay,
        }
    }

    /// Drive the store from its current permutation to sorted order.
    ///
    /// Metrics are reset first. Arrays shorter than two elements return at
    /// once with zero counts. If the run fails (cancellation, frame limit),
    /// the store is put back to its input values, all idle, before the error
    /// is returned.
    pub fn execute(&mut self, key: AlgorithmKey) -> Result<RunOutcome> {
        self.metrics.reset();
        self.metrics.start();

        let input = self.store.to_values();
        let mut arr: Vec<Tracked> = input
            .iter()
            .enumerate()
            .map(|(origin, &value)| Tracked { value, origin })
            .collect();

        debug!(algorithm = %key, len = arr.len(), "starting sort run");

        let result = if arr.len() < 2 {
            Ok(())
        } else {
            self.dispatch(key, &mut arr)
        };

        if let Err(e) = result {
            warn!(algorithm = %key, error = %e, "sort run aborted");
            self.restore(&input);
            return Err(e);
        }

        self.metrics.finish();
        let metrics = self.metrics.metrics();
        debug!(
            algorithm = %key,
            comparisons = metrics.comparisons,
            swaps = metrics.swaps,
            duration_ms = metrics.duration,
            "sort run finished"
        );

        Ok(RunOutcome {
            metrics,
            order: arr.iter().map(|t| t.origin).collect(),
        })
    }

    fn dispatch(&mut self, key: AlgorithmKey, arr: &mut [Tracked]) -> Result<()> {
        match key {
            AlgorithmKey::BubbleSort => self.bubble_sort(arr),
            AlgorithmKey::InsertionSort => self.insertion_sort(arr),
            AlgorithmKey::SelectionSort => self.selection_sort(arr),
            AlgorithmKey::MergeSort => self.merge_sort(arr),
            AlgorithmKey::QuickSort => self.quick_sort(arr),
            AlgorithmKey::HeapSort => self.heap_sort(arr),
            AlgorithmKey::RadixSort => self.radix_sort(arr),
            AlgorithmKey::BucketSort => self.bucket_sort(arr),
        }
    }

    // ========== Step helpers for runners ==========

    /// Apply one mutation and notify the observer
    pub(crate) fn change(&mut self, index: usize, update: ElementUpdate) {
        let element = self.store.mutate(index, update);
        self.observer.on_step(index, &element);
    }

    pub(crate) fn select(&mut self, index: usize) {
        self.change(index, ElementUpdate::select());
    }

    pub(crate) fn release(&mut self, index: usize) {
        self.change(index, ElementUpdate::release());
    }

    /// Suspension point: publish the snapshot, then let the scheduler pace
    pub(crate) fn pause(&mut self) -> Result<()> {
        let metrics = self.metrics.metrics();
        self.observer.on_pause(&*self.store, &metrics)?;
        trace!(
            selected = ?self.store.selected_indices(),
            comparisons = metrics.comparisons,
            swaps = metrics.swaps,
            "step"
        );
        self.scheduler.after(self.delay)
    }

    pub(crate) fn count_comparison(&mut self) {
        self.metrics.record_comparison();
    }

    pub(crate) fn count_swap(&mut self) {
        self.metrics.record_swap();
    }

    /// Write `input` back over a half-sorted store, skipping slots already equal
    fn restore(&mut self, input: &[u32]) {
        for (index, &value) in input.iter().enumerate() {
            let current = self.store.elements()[index];
            if current != ElementState::idle(value) {
                self.change(index, ElementUpdate::idle_value(value));
            }
        }
    }
}
