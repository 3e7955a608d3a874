//! Core data types for detection results.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::{infer_language, Language};
use crate::summary::Summary;

/// Signature catalog category. Declaration order is the catalog scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Css,
    Html,
    Js,
    Form,
}

impl Category {
    /// All categories in scan order.
    pub const ALL: [Category; 4] = [Category::Css, Category::Html, Category::Js, Category::Form];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Css => "css",
            Category::Html => "html",
            Category::Js => "js",
            Category::Form => "form",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Baseline support classification of a detected feature.
///
/// The derived ordering is the status priority used when sorting results:
/// `Baseline < NeedsFallback < Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportStatus {
    Baseline,
    NeedsFallback,
    Unknown,
}

impl SupportStatus {
    /// All statuses in priority order.
    pub const ALL: [SupportStatus; 3] = [
        SupportStatus::Baseline,
        SupportStatus::NeedsFallback,
        SupportStatus::Unknown,
    ];

    /// Map a tri-state dataset flag to a status.
    pub fn from_support(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => SupportStatus::Baseline,
            Some(false) => SupportStatus::NeedsFallback,
            None => SupportStatus::Unknown,
        }
    }

    /// Wire name (`baseline`, `needs-fallback`, `unknown`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::Baseline => "baseline",
            SupportStatus::NeedsFallback => "needs-fallback",
            SupportStatus::Unknown => "unknown",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SupportStatus::Baseline => "Baseline",
            SupportStatus::NeedsFallback => "Needs Fallback",
            SupportStatus::Unknown => "Unknown",
        }
    }

    /// Fixed report icon.
    pub fn icon(&self) -> &'static str {
        match self {
            SupportStatus::Baseline => "\u{2705}",
            SupportStatus::NeedsFallback => "\u{26a0}\u{fe0f}",
            SupportStatus::Unknown => "\u{2753}",
        }
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SupportStatus {
    type Err = BaselineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseline" => Ok(SupportStatus::Baseline),
            "needs-fallback" => Ok(SupportStatus::NeedsFallback),
            "unknown" => Ok(SupportStatus::Unknown),
            other => Err(BaselineError::InvalidInput(format!(
                "unknown support status: {other}"
            ))),
        }
    }
}

/// One feature found in an analyzed snippet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetectedFeature {
    pub feature: String,
    pub status: SupportStatus,
    pub found: bool,
}

impl DetectedFeature {
    pub fn new(feature: impl Into<String>, status: SupportStatus) -> Self {
        Self {
            feature: feature.into(),
            status,
            found: true,
        }
    }
}

/// Sort features by status priority, then identifier.
pub(crate) fn sort_features(features: &mut [DetectedFeature]) {
    features.sort_by(|a, b| {
        a.status
            .cmp(&b.status)
            .then_with(|| a.feature.cmp(&b.feature))
    });
}

/// The outcome of analyzing one snippet.
///
/// `language` and `summary` are always derived from `features`; a result
/// assembled from external parts is checked against that derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnalysisParts")]
pub struct AnalysisResult {
    language: Language,
    features: Vec<DetectedFeature>,
    summary: Summary,
}

/// Unvalidated result shape, as read from storage or an exported report.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisParts {
    pub language: Language,
    pub features: Vec<DetectedFeature>,
    pub summary: Summary,
}

impl AnalysisResult {
    /// Build a result from detected features.
    ///
    /// Features are put into contract order and repeated identifiers are
    /// dropped (the first occurrence wins).
    pub fn from_features(features: Vec<DetectedFeature>) -> Self {
        let mut seen = HashSet::new();
        let mut features: Vec<DetectedFeature> = features
            .into_iter()
            .filter(|f| seen.insert(f.feature.clone()))
            .collect();
        sort_features(&mut features);
        Self::from_sorted(features)
    }

    /// Build from a sequence already known to be unique and sorted.
    pub(crate) fn from_sorted(features: Vec<DetectedFeature>) -> Self {
        let language = infer_language(&features);
        let summary = Summary::from_features(&features);
        Self {
            language,
            features,
            summary,
        }
    }

    /// Assemble a result from externally supplied parts, rejecting anything
    /// that could not have come out of the detector.
    pub fn from_parts(parts: AnalysisParts) -> BaselineResult<Self> {
        let AnalysisParts {
            language,
            features,
            summary,
        } = parts;

        let mut seen = HashSet::new();
        for f in &features {
            if !f.found {
                return Err(BaselineError::InvalidReport(format!(
                    "feature {} is not marked as found",
                    f.feature
                )));
            }
            if !seen.insert(f.feature.as_str()) {
                return Err(BaselineError::InvalidReport(format!(
                    "duplicate feature {}",
                    f.feature
                )));
            }
        }

        for pair in features.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if (a.status, a.feature.as_str()) > (b.status, b.feature.as_str()) {
                return Err(BaselineError::InvalidReport(format!(
                    "features out of order: {} before {}",
                    a.feature, b.feature
                )));
            }
        }

        let derived = Self::from_sorted(features);
        if derived.summary != summary {
            return Err(BaselineError::InvalidReport(format!(
                "summary {summary:?} does not match features ({:?})",
                derived.summary
            )));
        }
        if derived.language != language {
            return Err(BaselineError::InvalidReport(format!(
                "language {language} does not match features ({})",
                derived.language
            )));
        }

        Ok(derived)
    }

    /// An empty result.
    pub fn empty() -> Self {
        Self::from_sorted(Vec::new())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn features(&self) -> &[DetectedFeature] {
        &self.features
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Look up a detected feature by identifier.
    pub fn get(&self, feature: &str) -> Option<&DetectedFeature> {
        self.features.iter().find(|f| f.feature == feature)
    }

    pub fn into_features(self) -> Vec<DetectedFeature> {
        self.features
    }
}

impl TryFrom<AnalysisParts> for AnalysisResult {
    type Error = BaselineError;

    fn try_from(parts: AnalysisParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

/// Errors that can occur in the detection library.
#[derive(thiserror::Error, Debug)]
pub enum BaselineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Invalid report: {0}")]
    InvalidReport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience result type.
pub type BaselineResult<T> = Result<T, BaselineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: &str, status: SupportStatus) -> DetectedFeature {
        DetectedFeature::new(id, status)
    }

    #[test]
    fn test_status_priority_order() {
        assert!(SupportStatus::Baseline < SupportStatus::NeedsFallback);
        assert!(SupportStatus::NeedsFallback < SupportStatus::Unknown);
    }

    #[test]
    fn test_status_from_support() {
        assert_eq!(SupportStatus::from_support(Some(true)), SupportStatus::Baseline);
        assert_eq!(
            SupportStatus::from_support(Some(false)),
            SupportStatus::NeedsFallback
        );
        assert_eq!(SupportStatus::from_support(None), SupportStatus::Unknown);
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&SupportStatus::NeedsFallback).unwrap();
        assert_eq!(json, "\"needs-fallback\"");
        let parsed: SupportStatus = "unknown".parse().unwrap();
        assert_eq!(parsed, SupportStatus::Unknown);
        assert!("Baseline".parse::<SupportStatus>().is_err());
    }

    #[test]
    fn test_from_features_sorts_and_dedups() {
        let result = AnalysisResult::from_features(vec![
            feature("fetch", SupportStatus::Unknown),
            feature("grid", SupportStatus::Baseline),
            feature("dialog", SupportStatus::Unknown),
            feature("fetch", SupportStatus::Baseline),
        ]);
        let ids: Vec<&str> = result.features().iter().map(|f| f.feature.as_str()).collect();
        assert_eq!(ids, vec!["grid", "dialog", "fetch"]);
        assert_eq!(result.summary().total, 3);
        assert_eq!(result.get("fetch").unwrap().status, SupportStatus::Unknown);
    }

    #[test]
    fn test_from_parts_accepts_consistent_parts() {
        let original = AnalysisResult::from_features(vec![
            feature("grid", SupportStatus::Baseline),
            feature("css-has", SupportStatus::NeedsFallback),
        ]);
        let parts = AnalysisParts {
            language: original.language(),
            features: original.features().to_vec(),
            summary: *original.summary(),
        };
        assert_eq!(AnalysisResult::from_parts(parts).unwrap(), original);
    }

    #[test]
    fn test_from_parts_rejects_bad_summary() {
        let parts = AnalysisParts {
            language: Language::Css,
            features: vec![feature("grid", SupportStatus::Baseline)],
            summary: Summary::default(),
        };
        assert!(matches!(
            AnalysisResult::from_parts(parts),
            Err(BaselineError::InvalidReport(_))
        ));
    }

    #[test]
    fn test_from_parts_rejects_duplicates_and_disorder() {
        let dup = vec![
            feature("grid", SupportStatus::Baseline),
            feature("grid", SupportStatus::Baseline),
        ];
        let parts = AnalysisParts {
            language: Language::Css,
            summary: Summary::from_features(&dup),
            features: dup,
        };
        assert!(AnalysisResult::from_parts(parts).is_err());

        let unordered = vec![
            feature("grid", SupportStatus::Unknown),
            feature("css-has", SupportStatus::Baseline),
        ];
        let parts = AnalysisParts {
            language: Language::Css,
            summary: Summary::from_features(&unordered),
            features: unordered,
        };
        assert!(AnalysisResult::from_parts(parts).is_err());
    }

    #[test]
    fn test_from_parts_rejects_wrong_language() {
        let features = vec![feature("grid", SupportStatus::Baseline)];
        let parts = AnalysisParts {
            language: Language::Html,
            summary: Summary::from_features(&features),
            features,
        };
        assert!(AnalysisResult::from_parts(parts).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let bad = serde_json::json!({
            "language": "CSS",
            "features": [{ "feature": "grid", "status": "baseline", "found": false }],
            "summary": { "total": 1, "baseline": 1, "needsFallback": 0, "unknown": 0 }
        });
        assert!(serde_json::from_value::<AnalysisResult>(bad).is_err());
    }
}
