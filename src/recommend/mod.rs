//! Rule-based sorting algorithm recommender
//!
//! This module scores every entry of the static [`profiles::PROFILES`] table
//! against a [`RecommendationParams`] and returns the best one:
//! - [`params`]: [`Distribution`] tags and the parameter struct
//! - [`profiles`]: per-algorithm characteristics and the complexity table
//!
//! # Scoring
//!
//! Each algorithm starts at 0. The rules below are all evaluated, in this
//! order, and their deltas are added:
//!
//! | rule | delta |
//! |------|-------|
//! | size within `max_recommended_size` | +1, else −2 |
//! | size < 50 and `SmallArrays` | +2 |
//! | size > 100 and `LargeArrays` | +2 |
//! | nearly sorted data and `NearlySorted` | +3 |
//! | random data and `AverageCasePerformance` | +2 |
//! | uniform data and `UniformDistribution` | +3 |
//! | stability required | +2 stable, −3 otherwise |
//! | low memory required | +2 in place, −2 otherwise |
//!
//! The highest score wins. On a tie the algorithm listed first in the table
//! is kept. That tie-break is positional, not semantic.
//!
//! Everything here is pure: identical parameters always produce identical
//! output.

pub mod params;
pub mod profiles;

use crate::sorting::AlgorithmKey;
use profiles::{AlgorithmProfile, GoodFor, PROFILES};
use serde::Serialize;

pub use params::{Distribution, RecommendationParams};

const SMALL_ARRAY_LIMIT: usize = 50;
const LARGE_ARRAY_LIMIT: usize = 100;

/// Score and reasons for one algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmScore {
    pub algorithm: AlgorithmKey,
    pub score: i32,
    pub explanation: Vec<String>,
}

/// The recommender's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub algorithm: AlgorithmKey,
    pub name: String,
    pub explanation: Vec<String>,
    pub time_complexity: String,
    pub space_complexity: String,
}

/// Apply the scoring rules to a single profile
pub fn score(profile: &AlgorithmProfile, params: &RecommendationParams) -> AlgorithmScore {
    let size = params.array_size;
    let mut score = 0;
    let mut explanation = Vec::new();

    if profile.suits_size(size) {
        score += 1;
    } else {
        score -= 2;
        explanation.push(format!("Not ideal for arrays of size {}", size));
    }

    if size < SMALL_ARRAY_LIMIT && profile.is_good_for(GoodFor::SmallArrays) {
        score += 2;
        explanation.push("Good for small arrays".to_string());
    }

    if size > LARGE_ARRAY_LIMIT && profile.is_good_for(GoodFor::LargeArrays) {
        score += 2;
        explanation.push("Efficient for large arrays".to_string());
    }

    match params.distribution {
        Distribution::NearlySorted if profile.is_good_for(GoodFor::NearlySorted) => {
            score += 3;
            explanation.push("Excellent for nearly sorted data".to_string());
        }
        Distribution::Random if profile.is_good_for(GoodFor::AverageCasePerformance) => {
            score += 2;
            explanation.push("Good for randomly distributed data".to_string());
        }
        Distribution::UniformDistribution if profile.is_good_for(GoodFor::UniformDistribution) => {
            score += 3;
            explanation.push("Optimized for uniform data distribution".to_string());
        }
        _ => {}
    }

    if params.stability_required {
        if profile.stable {
            score += 2;
            explanation.push("Maintains relative order of equal elements".to_string());
        } else {
            score -= 3;
            explanation.push("Does not maintain order of equal elements".to_string());
        }
    }

    if params.low_memory_required {
        if profile.in_place {
            score += 2;
            explanation.push("Uses minimal extra memory".to_string());
        } else {
            score -= 2;
            explanation.push("Requires additional memory".to_string());
        }
    }

    AlgorithmScore {
        algorithm: profile.key,
        score,
        explanation,
    }
}

/// Scores for every algorithm, highest first; ties keep table order
pub fn rank(params: &RecommendationParams) -> Vec<AlgorithmScore> {
    let mut scores: Vec<AlgorithmScore> = PROFILES.iter().map(|p| score(p, params)).collect();
    // sort_by is stable, so equal scores stay in table order
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}

/// Pick the single best algorithm for `params`
pub fn recommend(params: &RecommendationParams) -> Recommendation {
    let mut best = score(&PROFILES[0], params);
    for profile in &PROFILES[1..] {
        let candidate = score(profile, params);
        if candidate.score > best.score {
            best = candidate;
        }
    }

    let profile = profiles::profile(best.algorithm);

    Recommendation {
        algorithm: best.algorithm,
        name: profile.name.to_string(),
        explanation: best.explanation,
        time_complexity: profile.time_complexity_worst.to_string(),
        space_complexity: profile.space_complexity.to_string(),
    }
}

/// One-sentence summary, e.g. "Merge Sort is recommended because it ..."
pub fn describe(recommendation: &Recommendation) -> String {
    format!(
        "{} is recommended because it {}.",
        recommendation.name,
        recommendation.explanation.join(", ").to_lowercase()
    )
}

/// [`describe`] for an optional recommendation; empty when there is none
pub fn describe_opt(recommendation: Option<&Recommendation>) -> String {
    recommendation.map(describe).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_scoring_emits_no_log_events() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || Captured(Arc::clone(&sink)))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let p = params(1000, Distribution::Random, true, false);
            let rec = recommend(&p);
            rank(&p);
            describe(&rec);
            assert!(buffer.lock().unwrap().is_empty());

            // The capture itself works
            tracing::info!("marker");
        });
        assert!(!buffer.lock().unwrap().is_empty());
    }

    fn params(
        size: usize,
        distribution: Distribution,
        stable: bool,
        low_mem: bool,
    ) -> RecommendationParams {
        RecommendationParams {
            array_size: size,
            distribution,
            stability_required: stable,
            low_memory_required: low_mem,
        }
    }

    #[test]
    fn test_size_penalty_note() {
        let s = score(
            profiles::profile(AlgorithmKey::BubbleSort),
            &params(1000, Distribution::Reversed, false, false),
        );
        assert_eq!(s.score, -2);
        assert_eq!(s.explanation, vec!["Not ideal for arrays of size 1000"]);
    }

    #[test]
    fn test_bonuses_accumulate() {
        // +1 size, +2 small, +3 nearly sorted, +2 stable, +2 in place
        let s = score(
            profiles::profile(AlgorithmKey::InsertionSort),
            &params(20, Distribution::NearlySorted, true, true),
        );
        assert_eq!(s.score, 10);
        assert_eq!(s.explanation.len(), 4);
    }

    #[test]
    fn test_tie_keeps_first_in_table() {
        // merge, radix and bucket all score 5; merge is listed first
        let rec = recommend(&params(1000, Distribution::Random, true, false));
        assert_eq!(rec.algorithm, AlgorithmKey::MergeSort);

        let ranked = rank(&params(1000, Distribution::Random, true, false));
        let top: Vec<_> = ranked.iter().take(3).map(|s| s.algorithm).collect();
        assert_eq!(
            top,
            vec![
                AlgorithmKey::MergeSort,
                AlgorithmKey::RadixSort,
                AlgorithmKey::BucketSort
            ]
        );
    }

    #[test]
    fn test_describe() {
        let rec = recommend(&params(10, Distribution::NearlySorted, false, false));
        assert_eq!(rec.algorithm, AlgorithmKey::BubbleSort);
        assert_eq!(
            describe(&rec),
            "Bubble Sort is recommended because it good for small arrays, \
             excellent for nearly sorted data."
        );
        assert_eq!(describe_opt(None), "");
    }
}
