//! Filtering, sorting and paging over an analysis result.

use serde::{Deserialize, Serialize};

use crate::types::{AnalysisResult, DetectedFeature, SupportStatus};

/// Default page size.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Sort key for a feature listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Status priority, then identifier.
    #[default]
    Status,
    /// Identifier only.
    Feature,
}

/// Listing parameters. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureQuery {
    pub status: Option<SupportStatus>,
    pub search: Option<String>,
    pub sort: SortKey,
    pub page: usize,
    pub per_page: usize,
}

impl Default for FeatureQuery {
    fn default() -> Self {
        Self {
            status: None,
            search: None,
            sort: SortKey::Status,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of a feature listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePage<'a> {
    pub items: Vec<&'a DetectedFeature>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl FeatureQuery {
    pub fn with_status(mut self, status: SupportStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    fn accepts(&self, feature: &DetectedFeature, needle: Option<&str>) -> bool {
        if self.status.is_some_and(|s| s != feature.status) {
            return false;
        }
        match needle {
            Some(needle) => feature.feature.to_lowercase().contains(needle),
            None => true,
        }
    }

    /// Run the query against a result.
    pub fn run<'a>(&self, result: &'a AnalysisResult) -> FeaturePage<'a> {
        let needle = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&DetectedFeature> = result
            .features()
            .iter()
            .filter(|f| self.accepts(f, needle.as_deref()))
            .collect();

        // Results already arrive in status order.
        if self.sort == SortKey::Feature {
            matches.sort_by(|a, b| a.feature.cmp(&b.feature));
        }

        let per_page = self.per_page.max(1);
        let page = self.page.max(1);
        let total_matches = matches.len();
        let total_pages = total_matches.div_ceil(per_page);

        let items = matches
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        FeaturePage {
            items,
            page,
            total_pages,
            total_matches,
        }
    }
}

/// Run `query` against `result`.
pub fn query<'a>(result: &'a AnalysisResult, query: &FeatureQuery) -> FeaturePage<'a> {
    query.run(result)
}

/// Features grouped by status, in priority order. Every status is present.
pub fn group_by_status(result: &AnalysisResult) -> [(SupportStatus, Vec<&DetectedFeature>); 3] {
    SupportStatus::ALL.map(|status| {
        let group: Vec<&DetectedFeature> = result
            .features()
            .iter()
            .filter(|f| f.status == status)
            .collect();
        (status, group)
    })
}
