//! baseline-check — detect web-platform features in a code snippet and classify their Baseline support.

pub mod catalog;
pub mod dataset;
pub mod detector;
pub mod docs;
pub mod export;
pub mod language;
pub mod query;
pub mod signatures;
pub mod summary;
pub mod types;

pub use catalog::{CatalogError, CategorySpecs, FeatureSignature, RuleSpec, SignatureCatalog};
pub use dataset::BaselineDataset;
pub use detector::{analyze, detect, Detector};
pub use docs::{display_name, resolve_documentation};
pub use export::{from_json, to_json, to_json_at, to_markdown, to_markdown_at, ExportedReport};
pub use language::{infer_language, Language};
pub use query::{group_by_status, query, FeatureQuery, FeaturePage, SortKey};
pub use summary::{CompatibilityRating, Summary};
pub use types::*;
