//! Feature detection: run the signature catalog over a snippet.

use std::collections::HashSet;

use crate::catalog::SignatureCatalog;
use crate::dataset::BaselineDataset;
use crate::types::{sort_features, AnalysisResult, DetectedFeature};

/// Applies a signature catalog to source text.
///
/// The detector holds no per-call state; one value can serve any number of
/// concurrent analyses.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'a> {
    catalog: &'a SignatureCatalog,
}

impl Default for Detector<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Detector<'a> {
    pub fn new(catalog: &'a SignatureCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a SignatureCatalog {
        self.catalog
    }

    /// Detect features in `text` and classify them against `dataset`.
    ///
    /// The output holds one entry per matched identifier, ordered by status
    /// priority and then identifier.
    pub fn detect(&self, text: &str, dataset: &BaselineDataset) -> Vec<DetectedFeature> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut features = Vec::new();

        if text.is_empty() {
            return features;
        }

        for signature in self.catalog.iter() {
            let id = signature.id();
            if seen.contains(id) || !signature.matches(text) {
                continue;
            }
            seen.insert(id);
            features.push(DetectedFeature::new(id, dataset.status_of(id)));
        }

        sort_features(&mut features);
        features
    }

    /// Detect features and derive the language and summary.
    pub fn analyze(&self, text: &str, dataset: &BaselineDataset) -> AnalysisResult {
        let features = self.detect(text, dataset);
        tracing::trace!(
            "Analyzed {} bytes, found {} features",
            text.len(),
            features.len()
        );
        AnalysisResult::from_sorted(features)
    }
}

impl Detector<'static> {
    /// Detector over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(SignatureCatalog::builtin())
    }
}

/// Detect features with the built-in catalog.
pub fn detect(text: &str, dataset: &BaselineDataset) -> Vec<DetectedFeature> {
    Detector::builtin().detect(text, dataset)
}

/// Analyze a snippet with the built-in catalog.
pub fn analyze(text: &str, dataset: &BaselineDataset) -> AnalysisResult {
    Detector::builtin().analyze(text, dataset)
}
