// Recommendation inputs: data characteristics chosen by the user

use crate::sorting::errors::{Result, SortError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Statistical shape of the input data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    #[default]
    Random,
    NearlySorted,
    Reversed,
    FewUnique,
    UniformDistribution,
}

impl Distribution {
    pub const ALL: [Distribution; 5] = [
        Distribution::Random,
        Distribution::NearlySorted,
        Distribution::Reversed,
        Distribution::FewUnique,
        Distribution::UniformDistribution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::NearlySorted => "nearly_sorted",
            Distribution::Reversed => "reversed",
            Distribution::FewUnique => "few_unique",
            Distribution::UniformDistribution => "uniform_distribution",
        }
    }

    /// Human-readable label for the UI
    pub fn label(self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::NearlySorted => "Nearly Sorted",
            Distribution::Reversed => "Reversed",
            Distribution::FewUnique => "Few Unique Values",
            Distribution::UniformDistribution => "Uniform Distribution",
        }
    }

    /// Next tag in declaration order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| SortError::UnknownDistribution(s.to_string()))
    }
}

/// Characteristics the recommender scores against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationParams {
    pub array_size: usize,
    pub distribution: Distribution,
    pub stability_required: bool,
    pub low_memory_required: bool,
}

impl Default for RecommendationParams {
    fn default() -> Self {
        RecommendationParams {
            array_size: 10,
            distribution: Distribution::Random,
            stability_required: false,
            low_memory_required: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_tags() {
        for d in Distribution::ALL {
            assert_eq!(d.as_str().parse::<Distribution>().unwrap(), d);
        }
        assert!(matches!(
            "bimodal".parse::<Distribution>(),
            Err(SortError::UnknownDistribution(tag)) if tag == "bimodal"
        ));
        assert_eq!(Distribution::UniformDistribution.next(), Distribution::Random);
    }
}
