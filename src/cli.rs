//! Command-line interface
//!
//! ```bash
//! sortty                                   # interactive visualizer
//! sortty tui --algorithm heap_sort --size 30 --speed fast
//! sortty run quick_sort --values 5,3,8,1 --json
//! sortty recommend --size 1000 --distribution random --stable
//! sortty table
//! ```

use crate::config::Speed;
use crate::recommend::Distribution;
use crate::sorting::AlgorithmKey;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// sortty: step-traced sorting visualizer
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sortty")]
#[command(version)]
#[command(about = "Watch sorting algorithms step by step and get a recommendation for your data")]
pub struct Cli {
    /// Subcommand to execute (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive terminal visualizer
    Tui(TuiArgs),

    /// Run one algorithm headless and print the result
    Run(RunArgs),

    /// Recommend an algorithm for the given data characteristics
    Recommend(RecommendArgs),

    /// Print the time complexity table
    Table,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TuiArgs {
    /// Initially selected algorithm
    #[arg(short, long, default_value = "bubble_sort")]
    pub algorithm: AlgorithmKey,

    /// Number of bars (5-50)
    #[arg(short, long, default_value_t = 12)]
    pub size: usize,

    /// Playback speed: slow, normal, or fast
    #[arg(long, default_value = "slow")]
    pub speed: Speed,

    /// Seed for array generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for TuiArgs {
    fn default() -> Self {
        TuiArgs {
            algorithm: AlgorithmKey::BubbleSort,
            size: 12,
            speed: Speed::Slow,
            seed: None,
            log_file: None,
        }
    }
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Algorithm key, e.g. merge_sort
    #[arg(value_name = "ALGORITHM")]
    pub algorithm: AlgorithmKey,

    /// Size of the generated array (5-50)
    #[arg(short, long, default_value_t = 12)]
    pub size: usize,

    /// Sort these values instead of a generated array
    #[arg(long, value_delimiter = ',', conflicts_with = "size")]
    pub values: Option<Vec<u32>>,

    /// Seed for array generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between steps: slow, normal, fast, or instant
    #[arg(long, default_value = "instant")]
    pub speed: Speed,

    /// Print the array at every step
    #[arg(long, conflicts_with = "json")]
    pub trace: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RecommendArgs {
    /// Number of elements to sort
    #[arg(long, value_parser = parse_positive)]
    pub size: usize,

    /// Data distribution tag
    #[arg(short, long, default_value = "random")]
    pub distribution: Distribution,

    /// Equal elements must keep their order
    #[arg(long)]
    pub stable: bool,

    /// Prefer algorithms without extra memory
    #[arg(long)]
    pub low_memory: bool,

    /// Show every algorithm's score, not just the winner
    #[arg(long)]
    pub rank: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Parse command-line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = parse_args(["sortty"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_run_with_values() {
        let args = ["sortty", "run", "bubble_sort", "--values", "5,3,8,1", "--json"];
        let cli = parse_args(args).unwrap();
        match cli.command {
            Some(Command::Run(args)) => {
                assert_eq!(args.algorithm, AlgorithmKey::BubbleSort);
                assert_eq!(args.values, Some(vec![5, 3, 8, 1]));
                assert_eq!(args.speed, Speed::Instant);
                assert!(args.json);
            }
            other => panic!("Expected Run command, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(parse_args(["sortty", "run", "sleep_sort"]).is_err());
    }

    #[test]
    fn test_parse_recommend() {
        let cli = parse_args([
            "sortty",
            "recommend",
            "--size",
            "1000",
            "--distribution",
            "nearly_sorted",
            "--stable",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.size, 1000);
                assert_eq!(args.distribution, Distribution::NearlySorted);
                assert!(args.stable);
                assert!(!args.low_memory);
            }
            other => panic!("Expected Recommend command, got {:?}", other),
        }
    }

    #[test]
    fn test_recommend_rejects_bad_inputs() {
        assert!(parse_args(["sortty", "recommend", "--size", "0"]).is_err());
        assert!(parse_args(["sortty", "recommend", "--size", "10", "-d", "gaussian"]).is_err());
    }

    #[test]
    fn test_parse_tui_flags() {
        let args = ["sortty", "tui", "-a", "heap_sort", "-s", "30", "--speed", "fast"];
        let cli = parse_args(args).unwrap();
        match cli.command {
            Some(Command::Tui(args)) => {
                assert_eq!(args.algorithm, AlgorithmKey::HeapSort);
                assert_eq!(args.size, 30);
                assert_eq!(args.speed, Speed::Fast);
            }
            other => panic!("Expected Tui command, got {:?}", other),
        }
    }
}
