//! Placeholder box-office predictor
//!
//! An explicit stand-in for a trained model: one uniform random score per
//! catalog title, plus a small integer jitter per live sample. Treat this
//! as a mock boundary; nothing downstream may assume the scores mean
//! anything.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::predict::JITTER;
use crate::error::{AppError, Result};

/// A title with its placeholder score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTitle {
    pub title: String,
    pub score: f64,
}

/// Placeholder predictor with an owned RNG (seedable for tests)
pub struct Predictor {
    rng: StdRng,
}

impl Predictor {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic predictor for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One uniform [0, 1) score per title, paired with the title
    pub fn score_all(&mut self, titles: &[String]) -> Vec<ScoredTitle> {
        titles
            .iter()
            .map(|title| ScoredTitle {
                title: title.clone(),
                score: self.rng.gen_range(0.0..1.0),
            })
            .collect()
    }

    /// One live sample for a selected title: its score plus a uniform
    /// integer jitter in [-2, 2], rounded to one decimal. A title with no
    /// catalog row is a typed error instead of a crash.
    pub fn sample(&mut self, titles: &[String], selected: &str) -> Result<f64> {
        let scored = self.score_all(titles);
        let score = scored
            .iter()
            .find(|s| s.title == selected)
            .map(|s| s.score)
            .ok_or_else(|| AppError::MovieNotFound {
                title: selected.to_string(),
            })?;

        let jitter = self.rng.gen_range(-JITTER..=JITTER) as f64;
        Ok(((score + jitter) * 10.0).round() / 10.0)
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        vec![
            "Arrival".to_string(),
            "Heat".to_string(),
            "Inception".to_string(),
        ]
    }

    #[test]
    fn test_score_all_pairs_every_title() {
        let mut predictor = Predictor::with_seed(42);
        let scored = predictor.score_all(&titles());

        assert_eq!(scored.len(), 3);
        for (scored, title) in scored.iter().zip(titles()) {
            assert_eq!(scored.title, title);
            assert!((0.0..1.0).contains(&scored.score));
        }
    }

    #[test]
    fn test_scores_are_deterministic_with_seed() {
        let mut a = Predictor::with_seed(7);
        let mut b = Predictor::with_seed(7);
        assert_eq!(a.score_all(&titles()), b.score_all(&titles()));
    }

    #[test]
    fn test_sample_stays_within_jitter_bounds() {
        let mut predictor = Predictor::with_seed(3);
        for _ in 0..200 {
            let value = predictor.sample(&titles(), "Inception").unwrap();
            // score in [0, 1) plus integer jitter in [-2, 2], one decimal
            assert!((-2.0..3.0).contains(&value), "value {} out of range", value);
            let scaled = value * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unknown_title_is_movie_not_found() {
        let mut predictor = Predictor::with_seed(1);
        let err = predictor.sample(&titles(), "Tenet").unwrap_err();
        assert!(matches!(err, AppError::MovieNotFound { .. }));
    }
}
