//! Baseline support dataset: feature identifier to tri-state support flag.
//!
//! The dataset is a flat JSON object. `true` marks a Baseline feature,
//! `false` one that needs a fallback; `null` and missing keys both mean the
//! support status is unknown.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::types::{BaselineError, BaselineResult, SupportStatus};

/// Dataset shipped with the crate, embedded at compile time.
const BUILTIN_DATASET_JSON: &str = include_str!("../data/baseline.json");

/// Read-only support dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Option<bool>>")]
pub struct BaselineDataset {
    support: HashMap<String, bool>,
}

impl From<HashMap<String, Option<bool>>> for BaselineDataset {
    fn from(raw: HashMap<String, Option<bool>>) -> Self {
        raw.into_iter()
            .filter_map(|(id, flag)| flag.map(|f| (id, f)))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for BaselineDataset {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            support: iter.into_iter().map(|(id, f)| (id.into(), f)).collect(),
        }
    }
}

impl BaselineDataset {
    /// The embedded dataset, parsed on first use.
    pub fn builtin() -> &'static BaselineDataset {
        static DATASET: OnceLock<BaselineDataset> = OnceLock::new();
        DATASET.get_or_init(|| {
            Self::from_json_str(BUILTIN_DATASET_JSON).expect("embedded baseline dataset is valid")
        })
    }

    /// An empty dataset: every feature classifies as unknown.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a dataset from JSON text.
    pub fn from_json_str(json: &str) -> BaselineResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(BaselineError::Dataset(
                "expected a JSON object of feature flags".to_string(),
            ));
        }
        let dataset: Self = serde_json::from_value(value)
            .map_err(|e| BaselineError::Dataset(format!("invalid feature flags: {e}")))?;
        tracing::debug!("Loaded baseline dataset with {} entries", dataset.len());
        Ok(dataset)
    }

    /// Read a dataset from a JSON file.
    pub fn from_file(path: &Path) -> BaselineResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Tri-state support flag for a feature.
    pub fn support(&self, feature: &str) -> Option<bool> {
        self.support.get(feature).copied()
    }

    /// Status classification for a feature.
    pub fn status_of(&self, feature: &str) -> SupportStatus {
        SupportStatus::from_support(self.support(feature))
    }

    pub fn len(&self) -> usize {
        self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.support.iter().map(|(id, f)| (id.as_str(), *f))
    }
}
