//! JSON and Markdown report exporters.

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::summary::Summary;
use crate::types::{AnalysisParts, AnalysisResult, BaselineResult, DetectedFeature, SupportStatus};

/// Serialized shape of an exported report.
#[derive(Serialize)]
struct ReportView<'a> {
    timestamp: String,
    language: Language,
    summary: &'a Summary,
    features: &'a [DetectedFeature],
}

/// A parsed JSON report, not yet validated.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportedReport {
    pub timestamp: DateTime<Utc>,
    pub language: Language,
    pub summary: Summary,
    pub features: Vec<DetectedFeature>,
}

impl ExportedReport {
    /// Validate the report back into an analysis result.
    pub fn into_result(self) -> BaselineResult<AnalysisResult> {
        AnalysisResult::from_parts(AnalysisParts {
            language: self.language,
            features: self.features,
            summary: self.summary,
        })
    }
}

/// Export a result as pretty JSON stamped with the current time.
pub fn to_json(result: &AnalysisResult) -> BaselineResult<String> {
    to_json_at(result, Utc::now())
}

/// Export a result as pretty JSON with an explicit timestamp.
pub fn to_json_at(result: &AnalysisResult, timestamp: DateTime<Utc>) -> BaselineResult<String> {
    let view = ReportView {
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        language: result.language(),
        summary: result.summary(),
        features: result.features(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Parse a JSON report produced by [`to_json`].
pub fn from_json(json: &str) -> BaselineResult<ExportedReport> {
    Ok(serde_json::from_str(json)?)
}

/// Render a result as a Markdown report stamped with the current time.
pub fn to_markdown(result: &AnalysisResult) -> String {
    to_markdown_at(result, Utc::now())
}

/// Render a result as a Markdown report with an explicit timestamp.
pub fn to_markdown_at(result: &AnalysisResult, timestamp: DateTime<Utc>) -> String {
    let mut md = String::from("# Baseline Report\n\n");
    let _ = writeln!(
        md,
        "*Generated on {}*\n",
        timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(md, "**Language:** {}\n", result.language());

    if result.is_empty() {
        md.push_str("No features detected in the provided code.\n");
        return md;
    }

    let summary = result.summary();
    md.push_str("## Summary\n\n");
    let _ = writeln!(md, "- **Total Features Detected:** {}", summary.total);
    for status in SupportStatus::ALL {
        let _ = writeln!(
            md,
            "- **{} {}:** {}",
            status.icon(),
            status.label(),
            summary.count(status)
        );
    }
    md.push('\n');

    md.push_str("## Detailed Results\n\n");
    for status in SupportStatus::ALL {
        let group: Vec<&DetectedFeature> = result
            .features()
            .iter()
            .filter(|f| f.status == status)
            .collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(
            md,
            "### {} {} ({})\n",
            status.icon(),
            status.label(),
            group.len()
        );
        for f in group {
            let _ = writeln!(md, "- **{}**", f.feature);
        }
        md.push('\n');
    }

    md.push_str("---\n\n");
    md.push_str("*Report generated by baseline-check*\n");
    md
}
