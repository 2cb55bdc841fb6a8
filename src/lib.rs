//! # Introduction
//!
//! sortty runs classic sorting algorithms step by step over a small array of
//! bars, reporting every slot mutation to an observer, and recommends an
//! algorithm for a described workload.  A run can be recorded into a frame
//! history and navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! ArrayStore → SortContext (runner) → StepObserver / StepScheduler → Frames → TUI
//! ```
//!
//! 1. [`store`] — the array of bar slots, random generation, and point
//!    mutation of a single slot.
//! 2. [`sorting`] — the eight instrumented runners, driven by a
//!    [`sorting::SortContext`] that routes every change to the store, the
//!    observer, and the pacing [`scheduler`].
//! 3. [`metrics`] — comparison/swap counters and run duration.
//! 4. [`snapshot`] — frame recording with a configurable memory limit, used
//!    for time-travel playback.
//! 5. [`recommend`] — the static algorithm profile table and the rule-based
//!    scorer.
//! 6. [`config`] and [`cli`] — playback speed, visualizer settings, and the
//!    `clap` command line.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, insertion, selection, merge, quick, heap, radix (LSD, base 10),
//! and bucket sort.  Only bubble, selection, and quick sort count
//! comparisons and swaps.

pub mod cli;
pub mod config;
pub mod metrics;
pub mod recommend;
pub mod scheduler;
pub mod snapshot;
pub mod sorting;
pub mod store;
pub mod ui;
