// sortty: step-traced sorting visualizer with an algorithm recommender

use std::error::Error;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::cli::{Cli, Command, RecommendArgs, RunArgs, TuiArgs};
use sortty::config::VisualizerConfig;
use sortty::metrics::{Metrics, MetricsCollector};
use sortty::recommend::{self, RecommendationParams, profiles};
use sortty::scheduler::{ImmediateScheduler, SleepScheduler, StepScheduler};
use sortty::sorting::{self, AlgorithmKey, SortContext, StepObserver};
use sortty::store::{ArrayStore, ElementState};
use sortty::ui::App;

use clap::Parser;
use serde::Serialize;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tui(TuiArgs::default())) {
        Command::Tui(args) => {
            if let Some(path) = &args.log_file {
                init_file_logging(cli.verbose, path)?;
            }
            run_tui(args)
        }
        Command::Run(args) => {
            init_stderr_logging(cli.verbose)?;
            run_headless(args)
        }
        Command::Recommend(args) => {
            init_stderr_logging(cli.verbose)?;
            print_recommendation(args)
        }
        Command::Table => {
            print_complexity_table();
            Ok(())
        }
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "sortty=debug"
    } else {
        "sortty=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_stderr_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}

// The alternate screen owns the terminal, so TUI logs only go to a file
fn init_file_logging(verbose: bool, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn run_tui(args: TuiArgs) -> Result<(), Box<dyn Error>> {
    let config = VisualizerConfig {
        algorithm: args.algorithm,
        array_size: args.size,
        speed: args.speed,
        seed: args.seed,
        ..VisualizerConfig::default()
    };
    config.validate()?;

    // Build the first recording before touching the terminal
    let rng = make_rng(config.seed);
    let mut app = App::new(config, rng)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Prints the array at every suspension point, highlighted slots in brackets
struct TracePrinter {
    pauses: usize,
}

impl StepObserver for TracePrinter {
    fn on_step(&mut self, _index: usize, _element: &ElementState) {}

    fn on_pause(&mut self, store: &ArrayStore, metrics: &Metrics) -> sorting::errors::Result<()> {
        self.pauses += 1;
        let cells: Vec<String> = store
            .elements()
            .iter()
            .map(|e| {
                if e.is_selected() {
                    format!("[{}]", e.value)
                } else {
                    e.value.to_string()
                }
            })
            .collect();
        println!(
            "{:>5}  {}  (cmp {}, swp {})",
            self.pauses,
            cells.join(" "),
            metrics.comparisons,
            metrics.swaps
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct RunReport {
    algorithm: AlgorithmKey,
    input: Vec<u32>,
    output: Vec<u32>,
    metrics: Metrics,
}

fn run_headless(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let mut store = match &args.values {
        Some(values) => ArrayStore::from_values(values),
        None => {
            let mut rng = make_rng(args.seed);
            let mut store = ArrayStore::new();
            store.generate(args.size, &mut rng)?;
            store
        }
    };
    let input = store.to_values();

    let mut scheduler: Box<dyn StepScheduler> = if args.speed.delay().is_zero() {
        Box::new(ImmediateScheduler::new())
    } else {
        Box::new(SleepScheduler::default())
    };
    let mut metrics = MetricsCollector::new();
    let mut printer = TracePrinter { pauses: 0 };
    let mut silent = sorting::NoopObserver;
    let observer: &mut dyn StepObserver = if args.trace {
        &mut printer
    } else {
        &mut silent
    };

    let outcome = SortContext::new(
        &mut store,
        &mut metrics,
        scheduler.as_mut(),
        observer,
        args.speed.delay(),
    )
    .execute(args.algorithm)?;

    let report = RunReport {
        algorithm: args.algorithm,
        input,
        output: store.to_values(),
        metrics: outcome.metrics,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Algorithm:   {}", profiles::profile(report.algorithm).name);
        println!("Input:       {:?}", report.input);
        println!("Output:      {:?}", report.output);
        if report.algorithm.records_metrics() {
            println!("Comparisons: {}", report.metrics.comparisons);
            println!("Swaps:       {}", report.metrics.swaps);
        } else {
            println!("Comparisons: - (not counted for this algorithm)");
            println!("Swaps:       - (not counted for this algorithm)");
        }
        println!("Duration:    {} ms", report.metrics.duration);
    }
    Ok(())
}

fn print_recommendation(args: RecommendArgs) -> Result<(), Box<dyn Error>> {
    let params = RecommendationParams {
        array_size: args.size,
        distribution: args.distribution,
        stability_required: args.stable,
        low_memory_required: args.low_memory,
    };
    let recommendation = recommend::recommend(&params);
    info!(
        algorithm = %recommendation.algorithm,
        array_size = params.array_size,
        distribution = %params.distribution,
        "recommendation"
    );

    if args.json {
        if args.rank {
            println!("{}", serde_json::to_string_pretty(&recommend::rank(&params))?);
        } else {
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        }
        return Ok(());
    }

    println!("{}", recommend::describe(&recommendation));
    println!("Time complexity (worst): {}", recommendation.time_complexity);
    println!("Space complexity:        {}", recommendation.space_complexity);

    if args.rank {
        println!();
        for (place, entry) in recommend::rank(&params).iter().enumerate() {
            println!(
                "{:>2}. {:<15} {:>3}  {}",
                place + 1,
                profiles::profile(entry.algorithm).name,
                entry.score,
                entry.explanation.join("; ")
            );
        }
    }
    Ok(())
}

fn print_complexity_table() {
    println!(
        "{:<15} {:<12} {:<12} {:<12} {:<10}",
        "Algorithm", "Best", "Average", "Worst", "Space"
    );
    for key in AlgorithmKey::ALL {
        let profile = profiles::profile(key);
        let info = profiles::complexity(key);
        println!(
            "{:<15} {:<12} {:<12} {:<12} {:<10}",
            profile.name,
            info.best.bound,
            info.average.bound,
            info.worst.bound,
            profile.space_complexity
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortty::cli::parse_args;

    #[test]
    fn test_second_logging_init_is_an_error() {
        assert!(init_stderr_logging(false).is_ok());
        assert!(init_stderr_logging(true).is_err());
    }

    #[test]
    fn test_headless_run_completes_at_every_speed() {
        for speed in ["instant", "fast"] {
            let argv = ["sortty", "run", "quick_sort", "--values", "3,1,2", "--speed", speed];
            let Some(Command::Run(args)) = parse_args(argv).unwrap().command else {
                panic!("expected the run subcommand");
            };
            assert!(run_headless(args).is_ok(), "{}", speed);
        }
    }
}
