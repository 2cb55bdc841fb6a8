//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`bars`]: One bar per array slot for the frame under the playback cursor
//! - [`metrics`]: Comparison/swap counters, frame position, and the scoreboard
//! - [`recommender`]: Data characteristics and the recommended algorithm
//! - [`complexity`]: Best/average/worst table with derivation notes
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function that borrows the
//! state it draws and keeps nothing between frames.

pub mod bars;
pub mod complexity;
pub mod metrics;
pub mod recommender;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use complexity::render_complexity_pane;
pub use metrics::render_metrics_pane;
pub use recommender::render_recommender_pane;
pub use status::render_status_bar;
