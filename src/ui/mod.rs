//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, playback of the recorded run
//! - **[`panes`]** — stateless render functions for each visible pane (bars, metrics,
//!   recommender, complexity table, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`VisualizerConfig`]
//! and a random source, then call [`App::run`] to start the event loop.
//!
//! [`VisualizerConfig`]: crate::config::VisualizerConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
