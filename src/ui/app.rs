//! Main TUI application state and logic

use crate::config::VisualizerConfig;
use crate::metrics::Metrics;
use crate::recommend::{self, Recommendation};
use crate::snapshot::{FrameHistory, record_run};
use crate::sorting::errors::{Result, SortError};
use crate::sorting::{AlgorithmKey, RunOutcome};
use crate::store::ArrayStore;
use crate::ui::panes::{
    render_bars_pane, render_complexity_pane, render_metrics_pane, render_recommender_pane,
    render_status_bar,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// The main application state
pub struct App {
    /// Current settings (algorithm, size, speed, recommender inputs)
    pub config: VisualizerConfig,

    /// The array the next run starts from
    pub store: ArrayStore,

    rng: StdRng,

    /// Recorded frames of the current run, with the playback cursor
    pub history: FrameHistory,

    /// Final metrics and permutation of the current run (None if recording failed)
    pub outcome: Option<RunOutcome>,

    /// Final metrics of every algorithm played to the end on this array
    pub scoreboard: FxHashMap<AlgorithmKey, Metrics>,

    /// Recommender answer for the current inputs
    pub recommendation: Recommendation,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app, generate the first array, and record its run
    pub fn new(config: VisualizerConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let recommendation = recommend::recommend(&config.recommendation_params());
        let history = FrameHistory::new(config.frame_memory_limit);

        let mut app = App {
            config,
            store: ArrayStore::new(),
            rng,
            history,
            outcome: None,
            scoreboard: FxHashMap::default(),
            recommendation,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.regenerate()?;
        Ok(app)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance auto-play by one frame once the speed delay has elapsed
    pub fn tick(&mut self) {
        if !self.is_playing || self.last_play_time.elapsed() < self.config.speed.delay() {
            return;
        }
        if self.history.step_forward().is_ok() {
            self.status_message = "Playing...".to_string();
            self.on_frame_changed();
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
        self.last_play_time = Instant::now();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(pane_area);

        // Left column: Bars (top) | Complexity (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(13)])
            .split(columns[0]);

        // Right column: Metrics (top) | Recommender (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let finished = self.outcome.is_some() && self.history.is_at_end();

        render_bars_pane(
            frame,
            left_rows[0],
            self.history.current(),
            self.config.algorithm,
            finished,
        );

        render_complexity_pane(frame, left_rows[1], self.config.algorithm);

        render_metrics_pane(
            frame,
            right_rows[0],
            self.config.algorithm,
            self.history.current(),
            &self.history,
            &self.scoreboard,
        );

        render_recommender_pane(
            frame,
            right_rows[1],
            &self.config,
            &self.recommendation,
        );

        render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.history.position(),
            self.history.len(),
            self.config.speed,
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.history.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.on_frame_changed();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                if self.history.jump_to_end().is_ok() {
                    self.on_frame_changed();
                }
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let _ = self.history.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Tab => self.cycle_algorithm(),
            KeyCode::Char('n') => self.new_array(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(1),
            KeyCode::Char('-') => self.resize(-1),
            KeyCode::Char('s') => {
                self.config.speed = self.config.speed.next();
                self.status_message = format!("Speed: {}", self.config.speed);
            }
            KeyCode::Char('d') => {
                self.config.distribution = self.config.distribution.next();
                self.refresh_recommendation();
                self.status_message =
                    format!("Distribution: {}", self.config.distribution.label());
            }
            KeyCode::Char('t') => {
                self.config.stability_required = !self.config.stability_required;
                self.refresh_recommendation();
                self.status_message =
                    format!("Stability {}", required_label(self.config.stability_required));
            }
            KeyCode::Char('m') => {
                self.config.low_memory_required = !self.config.low_memory_required;
                self.refresh_recommendation();
                self.status_message =
                    format!("Low memory {}", required_label(self.config.low_memory_required));
            }
            KeyCode::Char('a') => self.apply_recommendation(),
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.history.is_at_end() && !self.is_playing {
            // Replay from the start instead of stopping right away
            let _ = self.history.rewind_to_start();
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_play_time = Instant::now()
                .checked_sub(self.config.speed.delay())
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Step forward in playback
    fn step_forward(&mut self) {
        match self.history.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.on_frame_changed();
            }
            Err(SortError::History(message)) => {
                self.status_message = format!("Cannot step forward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward in playback
    fn step_backward(&mut self) {
        match self.history.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
            }
            Err(SortError::History(message)) => {
                self.status_message = format!("Cannot step backward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Record the final metrics once playback reaches the last frame
    fn on_frame_changed(&mut self) {
        if !self.history.is_at_end() {
            return;
        }
        if let Some(outcome) = &self.outcome {
            self.scoreboard.insert(self.config.algorithm, outcome.metrics);
        }
    }

    /// Refuse store and algorithm changes while a run is playing
    fn refuse_while_playing(&mut self, action: &str) -> bool {
        if self.is_playing {
            self.status_message = format!("Pause playback before {}", action);
        }
        self.is_playing
    }

    fn cycle_algorithm(&mut self) {
        if self.refuse_while_playing("switching algorithm") {
            return;
        }
        self.select_algorithm(self.config.algorithm.next());
    }

    fn apply_recommendation(&mut self) {
        if self.refuse_while_playing("applying the recommendation") {
            return;
        }
        let key = self.recommendation.algorithm;
        if key == self.config.algorithm {
            self.status_message = format!("{} is already selected", self.recommendation.name);
            return;
        }
        self.select_algorithm(key);
    }

    fn select_algorithm(&mut self, key: AlgorithmKey) {
        self.config.algorithm = key;
        self.record();
        if self.outcome.is_some() {
            self.status_message = format!("Algorithm: {}", key);
        }
    }

    fn new_array(&mut self) {
        if self.refuse_while_playing("generating a new array") {
            return;
        }
        match self.regenerate() {
            Ok(()) => {
                if self.outcome.is_some() {
                    self.status_message = "New array generated".to_string();
                }
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    fn resize(&mut self, delta: isize) {
        if self.refuse_while_playing("resizing the array") {
            return;
        }
        let size = self.config.array_size.saturating_add_signed(delta);
        let previous = self.config.array_size;
        self.config.array_size = size;
        if let Err(e) = self.regenerate() {
            // Leave the current array and size untouched
            self.config.array_size = previous;
            self.status_message = format!("{}", e);
            return;
        }
        self.refresh_recommendation();
        if self.outcome.is_some() {
            self.status_message = format!("Array size: {}", size);
        }
    }

    /// Draw a fresh array of the configured size and record the run on it
    fn regenerate(&mut self) -> Result<()> {
        self.store.generate(self.config.array_size, &mut self.rng)?;
        self.scoreboard.clear();
        self.record();
        Ok(())
    }

    /// Record the selected algorithm on the current array, cursor at the start
    fn record(&mut self) {
        debug!(algorithm = %self.config.algorithm, len = self.store.len(), "recording run");
        match record_run(&self.store, self.config.algorithm, self.config.frame_memory_limit) {
            Ok((history, outcome)) => {
                self.history = history;
                self.outcome = Some(outcome);
            }
            Err(e) => {
                warn!(algorithm = %self.config.algorithm, error = %e, "recording failed");
                self.history = FrameHistory::new(self.config.frame_memory_limit);
                self.outcome = None;
                self.status_message = format!("Recording failed: {}", e);
            }
        }
    }

    fn refresh_recommendation(&mut self) {
        let params = self.config.recommendation_params();
        self.recommendation = recommend::recommend(&params);
        debug!(
            algorithm = %self.recommendation.algorithm,
            array_size = params.array_size,
            distribution = %params.distribution,
            "recommendation updated"
        );
    }
}

fn required_label(required: bool) -> &'static str {
    if required { "required" } else { "not required" }
}
