//! Summary counts and compatibility scoring.

use serde::{Deserialize, Serialize};

use crate::types::{DetectedFeature, SupportStatus};

/// Per-status tallies over a feature sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub baseline: usize,
    pub needs_fallback: usize,
    pub unknown: usize,
}

impl Summary {
    /// Fold over the sequence. Always recomputed, never patched.
    pub fn from_features(features: &[DetectedFeature]) -> Self {
        features.iter().fold(Self::default(), |mut acc, f| {
            acc.total += 1;
            match f.status {
                SupportStatus::Baseline => acc.baseline += 1,
                SupportStatus::NeedsFallback => acc.needs_fallback += 1,
                SupportStatus::Unknown => acc.unknown += 1,
            }
            acc
        })
    }

    /// Count for a single status.
    pub fn count(&self, status: SupportStatus) -> usize {
        match status {
            SupportStatus::Baseline => self.baseline,
            SupportStatus::NeedsFallback => self.needs_fallback,
            SupportStatus::Unknown => self.unknown,
        }
    }

    /// Share of baseline features as a rounded percentage.
    ///
    /// `None` when nothing was detected.
    pub fn compatibility_score(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let pct = (self.baseline as f64 / self.total as f64) * 100.0;
        Some(pct.round().clamp(0.0, 100.0) as u8)
    }

    /// Rating tier for the compatibility score.
    pub fn rating(&self) -> Option<CompatibilityRating> {
        self.compatibility_score().map(CompatibilityRating::from_score)
    }
}

/// Coarse rating of a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityRating {
    Outstanding,
    Great,
    Good,
    NeedsWork,
}

impl CompatibilityRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => CompatibilityRating::Outstanding,
            70..=84 => CompatibilityRating::Great,
            50..=69 => CompatibilityRating::Good,
            _ => CompatibilityRating::NeedsWork,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CompatibilityRating::Outstanding => {
                "Outstanding! Your code is highly compatible with modern browsers."
            }
            CompatibilityRating::Great => {
                "Great job! Most features are well-supported across browsers."
            }
            CompatibilityRating::Good => {
                "Good foundation with room for improvement in browser compatibility."
            }
            CompatibilityRating::NeedsWork => {
                "Consider adding fallbacks to improve cross-browser compatibility."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(statuses: &[SupportStatus]) -> Vec<DetectedFeature> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| DetectedFeature::new(format!("f{i}"), *s))
            .collect()
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_features(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.compatibility_score(), None);
        assert_eq!(summary.rating(), None);
    }

    #[test]
    fn test_counts_add_up() {
        use SupportStatus::*;
        let summary =
            Summary::from_features(&features(&[Baseline, Baseline, NeedsFallback, Unknown]));
        assert_eq!(summary.total, 4);
        assert_eq!(summary.baseline, 2);
        assert_eq!(summary.needs_fallback, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(
            summary.baseline + summary.needs_fallback + summary.unknown,
            summary.total
        );
        assert_eq!(summary.count(NeedsFallback), 1);
    }

    #[test]
    fn test_score_rounding() {
        use SupportStatus::*;
        let summary = Summary::from_features(&features(&[Baseline, Unknown, Unknown]));
        assert_eq!(summary.compatibility_score(), Some(33));
        let summary = Summary::from_features(&features(&[Baseline, Baseline, Unknown]));
        assert_eq!(summary.compatibility_score(), Some(67));
        assert_eq!(summary.rating(), Some(CompatibilityRating::Good));
    }

    #[test]
    fn test_rating_tiers() {
        assert_eq!(CompatibilityRating::from_score(100), CompatibilityRating::Outstanding);
        assert_eq!(CompatibilityRating::from_score(85), CompatibilityRating::Outstanding);
        assert_eq!(CompatibilityRating::from_score(84), CompatibilityRating::Great);
        assert_eq!(CompatibilityRating::from_score(70), CompatibilityRating::Great);
        assert_eq!(CompatibilityRating::from_score(50), CompatibilityRating::Good);
        assert_eq!(CompatibilityRating::from_score(49), CompatibilityRating::NeedsWork);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let summary = Summary {
            total: 1,
            baseline: 0,
            needs_fallback: 1,
            unknown: 0,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["needsFallback"], 1);
    }
}
