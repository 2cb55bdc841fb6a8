// Visualizer configuration: playback speed, array size, recommender inputs

use crate::recommend::{Distribution, RecommendationParams};
use crate::sorting::AlgorithmKey;
use crate::sorting::errors::{Result, SortError};
use crate::store::validate_array_size;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default frame-history budget for one recorded run (64 MB)
pub const DEFAULT_FRAME_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// Playback pace between two visible steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Slow,
    Normal,
    Fast,
    /// No pause at all (headless runs and tests)
    Instant,
}

impl Speed {
    pub fn delay(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1000),
            Speed::Normal => Duration::from_millis(500),
            Speed::Fast => Duration::from_millis(250),
            Speed::Instant => Duration::ZERO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
            Speed::Instant => "instant",
        }
    }

    /// Cycle slow -> normal -> fast -> slow (the UI never selects `Instant`)
    pub fn next(self) -> Self {
        match self {
            Speed::Slow => Speed::Normal,
            Speed::Normal => Speed::Fast,
            Speed::Fast | Speed::Instant => Speed::Slow,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speed {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "slow" => Ok(Speed::Slow),
            "normal" => Ok(Speed::Normal),
            "fast" => Ok(Speed::Fast),
            "instant" => Ok(Speed::Instant),
            other => Err(SortError::UnknownSpeed(other.to_string())),
        }
    }
}

/// Everything the interactive visualizer can be configured with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub algorithm: AlgorithmKey,
    pub array_size: usize,
    pub speed: Speed,
    /// Seed for array generation; `None` draws from the OS
    pub seed: Option<u64>,
    pub frame_memory_limit: usize,
    pub distribution: Distribution,
    pub stability_required: bool,
    pub low_memory_required: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            algorithm: AlgorithmKey::BubbleSort,
            array_size: 12,
            speed: Speed::Slow,
            seed: None,
            frame_memory_limit: DEFAULT_FRAME_MEMORY_LIMIT,
            distribution: Distribution::Random,
            stability_required: false,
            low_memory_required: false,
        }
    }
}

impl VisualizerConfig {
    /// Reject configurations the core would refuse later
    pub fn validate(&self) -> Result<()> {
        validate_array_size(self.array_size)
    }

    /// Recommender inputs derived from the current settings
    pub fn recommendation_params(&self) -> RecommendationParams {
        RecommendationParams {
            array_size: self.array_size,
            distribution: self.distribution,
            stability_required: self.stability_required,
            low_memory_required: self.low_memory_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_delays() {
        assert_eq!("slow".parse::<Speed>().unwrap().delay(), Duration::from_millis(1000));
        assert_eq!("normal".parse::<Speed>().unwrap().delay(), Duration::from_millis(500));
        assert_eq!("fast".parse::<Speed>().unwrap().delay(), Duration::from_millis(250));
        assert!(Speed::Instant.delay().is_zero());
        assert_eq!(
            "warp".parse::<Speed>(),
            Err(SortError::UnknownSpeed("warp".to_string()))
        );
        assert_eq!(Speed::Fast.next(), Speed::Slow);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.recommendation_params().array_size, 12);

        let bad = VisualizerConfig {
            array_size: 60,
            ..VisualizerConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
