//! Output rendering for analysis results.

use std::fmt::Write as _;

use clap::{Args, ValueEnum};

use baseline_check::{
    display_name, group_by_status, query, resolve_documentation, to_json, to_markdown,
    AnalysisResult, DetectedFeature, FeatureQuery, SortKey, SupportStatus,
};

use crate::error::CliResult;
use crate::history::{Bookmark, HistoryItem};

/// Report format for `analyze`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Baseline,
    NeedsFallback,
    Unknown,
}

impl From<StatusArg> for SupportStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Baseline => SupportStatus::Baseline,
            StatusArg::NeedsFallback => SupportStatus::NeedsFallback,
            StatusArg::Unknown => SupportStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Status priority, then identifier.
    Status,
    /// Identifier only.
    Feature,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Status => SortKey::Status,
            SortArg::Feature => SortKey::Feature,
        }
    }
}

/// Listing flags for the detailed section of the text report.
///
/// Without any of them the report groups every feature by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ListingArgs {
    /// Only list features with this status.
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Only list features whose identifier contains TEXT (case-insensitive).
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Listing order.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Page to show, 20 features per page.
    #[arg(long, value_name = "N")]
    pub page: Option<usize>,
}

impl ListingArgs {
    /// The query described by the flags, or `None` when none was given.
    pub fn to_query(&self) -> Option<FeatureQuery> {
        if *self == Self::default() {
            return None;
        }
        let mut query = FeatureQuery::default();
        if let Some(status) = self.status {
            query = query.with_status(status.into());
        }
        if let Some(search) = &self.search {
            query = query.with_search(search.as_str());
        }
        if let Some(sort) = self.sort {
            query = query.sorted_by(sort.into());
        }
        if let Some(page) = self.page {
            query = query.page(page);
        }
        Some(query)
    }
}

/// Options for the text report.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    pub with_docs: bool,
    pub listing: Option<FeatureQuery>,
}

/// Render a result in the chosen format. Exports always carry every feature.
pub fn render(result: &AnalysisResult, format: Format, options: &TextOptions) -> CliResult<String> {
    match format {
        Format::Text => Ok(render_text(result, options)),
        Format::Json => Ok(to_json(result)?),
        Format::Markdown => Ok(to_markdown(result)),
    }
}

/// Plain-text report for the terminal.
pub fn render_text(result: &AnalysisResult, options: &TextOptions) -> String {
    let mut out = String::new();
    let summary = result.summary();

    let _ = writeln!(out, "Language: {}", result.language());
    if result.is_empty() {
        out.push_str("No features detected in the provided code.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "Features: {} ({} baseline, {} needs fallback, {} unknown)",
        summary.total, summary.baseline, summary.needs_fallback, summary.unknown
    );
    if let (Some(score), Some(rating)) = (summary.compatibility_score(), summary.rating()) {
        let _ = writeln!(out, "Compatibility: {score}% - {}", rating.message());
    }

    match &options.listing {
        Some(listing) => write_listing(&mut out, result, listing, options.with_docs),
        None => write_groups(&mut out, result, options.with_docs),
    }
    out
}

fn write_groups(out: &mut String, result: &AnalysisResult, with_docs: bool) {
    for (status, group) in group_by_status(result) {
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{} {} ({})", status.icon(), status.label(), group.len());
        for feature in group {
            let _ = writeln!(out, "  {}", feature_line(feature, with_docs));
        }
    }
}

fn write_listing(out: &mut String, result: &AnalysisResult, listing: &FeatureQuery, with_docs: bool) {
    let page = query(result, listing);
    if page.total_matches == 0 {
        out.push_str("\nNo features match the filters.\n");
        return;
    }
    let _ = writeln!(
        out,
        "\nShowing {} of {} matching features (page {} of {})",
        page.items.len(),
        page.total_matches,
        page.page,
        page.total_pages
    );
    for feature in page.items {
        let _ = writeln!(out, "  {} {}", feature.status.icon(), feature_line(feature, with_docs));
    }
}

fn feature_line(feature: &DetectedFeature, with_docs: bool) -> String {
    let name = display_name(&feature.feature);
    match resolve_documentation(&feature.feature).filter(|_| with_docs) {
        Some(url) => format!("{:<36} {name}  {url}", feature.feature),
        None => format!("{:<36} {name}", feature.feature),
    }
}

/// One line per history entry.
pub fn history_line(item: &HistoryItem) -> String {
    format!(
        "{}  {}  {:<18} {:>3} features  {}",
        item.id,
        item.timestamp.format("%Y-%m-%d %H:%M"),
        item.results.language().as_str(),
        item.results.summary().total,
        single_line(&item.preview)
    )
}

/// One line per bookmark.
pub fn bookmark_line(bookmark: &Bookmark) -> String {
    let features = bookmark
        .results
        .as_ref()
        .map(|r| r.summary().total.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {}  {}  ({features} features)  {}",
        bookmark.id,
        bookmark.timestamp.format("%Y-%m-%d %H:%M"),
        bookmark.name,
        single_line(&bookmark.preview)
    )
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
