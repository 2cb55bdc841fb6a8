// Frame recording for step-by-step playback

use crate::metrics::{Metrics, MetricsCollector};
use crate::scheduler::ImmediateScheduler;
use crate::sorting::errors::{Result, SortError};
use crate::sorting::{AlgorithmKey, RunOutcome, SortContext, StepObserver};
use crate::store::{ArrayStore, ElementState};
use std::mem::size_of;
use std::time::Duration;

/// What a frame shows, for audio/visual subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCue {
    /// Counted comparison since the previous frame
    Compare,
    /// Counted swap since the previous frame
    Swap,
    /// Highlighted slots without a counted operation (uninstrumented runners)
    Place,
    /// Nothing highlighted (first and last frames)
    Idle,
}

impl StepCue {
    /// Classify a frame from its highlights and the counter delta
    pub fn classify(elements: &[ElementState], previous: &Metrics, current: &Metrics) -> Self {
        if current.swaps > previous.swaps {
            StepCue::Swap
        } else if current.comparisons > previous.comparisons {
            StepCue::Compare
        } else if elements.iter().any(|e| e.is_selected()) {
            StepCue::Place
        } else {
            StepCue::Idle
        }
    }
}

/// Snapshot of the array at one suspension point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub elements: Vec<ElementState>,
    /// Counters as of this frame (no timestamps)
    pub metrics: Metrics,
    pub cue: StepCue,
}

impl Frame {
    /// Estimate the memory usage of this frame in bytes
    pub fn estimated_size(&self) -> usize {
        size_of::<Frame>() + self.elements.len() * size_of::<ElementState>()
    }

    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.value).collect()
    }
}

/// Recorded frames of one run plus a playback cursor
#[derive(Debug, Clone)]
pub struct FrameHistory {
    frames: Vec<Frame>,
    position: usize,
    max_memory: usize,
    current_memory: usize,
}

impl FrameHistory {
    pub fn new(max_memory: usize) -> Self {
        FrameHistory {
            frames: Vec::new(),
            position: 0,
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a frame to history
    pub fn push(&mut self, frame: Frame) -> Result<()> {
        let frame_size = frame.estimated_size();

        if self.current_memory + frame_size > self.max_memory {
            return Err(SortError::FrameLimitExceeded {
                current: self.current_memory + frame_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += frame_size;
        self.frames.push(frame);
        Ok(())
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Frame under the playback cursor
    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.position)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.frames.len()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }

    /// Advance the cursor by one frame
    pub fn step_forward(&mut self) -> Result<()> {
        if self.position + 1 < self.frames.len() {
            self.position += 1;
            Ok(())
        } else {
            Err(SortError::History(
                "No more frames available (run finished)".to_string(),
            ))
        }
    }

    /// Move the cursor back by one frame
    pub fn step_backward(&mut self) -> Result<()> {
        if self.position == 0 {
            return Err(SortError::History(
                "Already at the beginning of the run".to_string(),
            ));
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) -> Result<()> {
        if self.frames.is_empty() {
            return Err(SortError::History("No frames available".to_string()));
        }
        self.position = 0;
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> Result<()> {
        if self.frames.is_empty() {
            return Err(SortError::History("No frames available".to_string()));
        }
        self.position = self.frames.len() - 1;
        Ok(())
    }
}

/// Observer that turns every suspension point into a [`Frame`]
#[derive(Debug)]
pub struct FrameRecorder {
    history: FrameHistory,
    last_metrics: Metrics,
}

impl FrameRecorder {
    pub fn new(max_memory: usize) -> Self {
        FrameRecorder {
            history: FrameHistory::new(max_memory),
            last_metrics: Metrics::default(),
        }
    }

    /// Record the store as it is now
    pub fn capture(&mut self, store: &ArrayStore, metrics: &Metrics) -> Result<()> {
        let counts = metrics.counts();
        let cue = StepCue::classify(store.elements(), &self.last_metrics, &counts);
        self.history.push(Frame {
            elements: store.snapshot(),
            metrics: counts,
            cue,
        })?;
        self.last_metrics = counts;
        Ok(())
    }

    pub fn into_history(self) -> FrameHistory {
        self.history
    }
}

impl StepObserver for FrameRecorder {
    fn on_step(&mut self, _index: usize, _element: &ElementState) {}

    fn on_pause(&mut self, store: &ArrayStore, metrics: &Metrics) -> Result<()> {
        self.capture(store, metrics)
    }
}

/// Run `key` on a copy of `store` and record every frame, including the
/// initial permutation and the final sorted array.
pub fn record_run(
    store: &ArrayStore,
    key: AlgorithmKey,
    max_memory: usize,
) -> Result<(FrameHistory, RunOutcome)> {
    let mut working = store.clone();
    let mut recorder = FrameRecorder::new(max_memory);
    recorder.capture(&working, &Metrics::default())?;

    let mut metrics = MetricsCollector::new();
    let mut scheduler = ImmediateScheduler::new();
    let outcome = SortContext::new(
        &mut working,
        &mut metrics,
        &mut scheduler,
        &mut recorder,
        Duration::ZERO,
    )
    .execute(key)?;

    recorder.capture(&working, &outcome.metrics)?;
    Ok((recorder.into_history(), outcome))
}
