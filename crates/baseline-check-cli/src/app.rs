//! Command operations shared by the binary and tests.

use std::borrow::Cow;

use baseline_check::{
    analyze, AnalysisResult, BaselineDataset, Category, SignatureCatalog, SupportStatus,
};

use crate::error::{CliError, CliResult};
use crate::history::{Bookmark, BookmarkShelf, HistoryItem, HistoryLog};
use crate::input::require_code;
use crate::storage::Storage;

/// A catalog entry with its dataset classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureListing {
    pub id: String,
    pub category: Category,
    pub status: SupportStatus,
}

/// Dataset plus persistence, wired together for one invocation.
#[derive(Debug)]
pub struct App<S> {
    dataset: Cow<'static, BaselineDataset>,
    storage: S,
}

impl<S: Storage + Clone> App<S> {
    pub fn new(dataset: Cow<'static, BaselineDataset>, storage: S) -> Self {
        Self { dataset, storage }
    }

    pub fn dataset(&self) -> &BaselineDataset {
        &self.dataset
    }

    pub fn history(&self) -> HistoryLog<S> {
        HistoryLog::new(self.storage.clone())
    }

    pub fn bookmarks(&self) -> BookmarkShelf<S> {
        BookmarkShelf::new(self.storage.clone())
    }

    /// Analyze a snippet. Whitespace-only input is rejected.
    pub fn analyze(&self, code: &str) -> CliResult<AnalysisResult> {
        let code = require_code(code.to_string())?;
        Ok(analyze(&code, &self.dataset))
    }

    /// Record an analysis in history. Failures are logged, never returned.
    pub fn record(&self, code: &str, result: &AnalysisResult) -> Option<HistoryItem> {
        let item = HistoryItem::new(code, result.clone());
        match self.history().record(item.clone()) {
            Ok(_) => Some(item),
            Err(e) => {
                tracing::warn!("Could not record history entry: {e}");
                None
            }
        }
    }

    /// Analyze `code` and save it as a bookmark.
    pub fn add_bookmark(&self, name: &str, code: &str) -> CliResult<Bookmark> {
        let result = self.analyze(code)?;
        let bookmark = Bookmark::new(name, code, Some(result));
        self.bookmarks().save(bookmark.clone())?;
        Ok(bookmark)
    }

    /// Remove a bookmark, failing if it does not exist.
    pub fn remove_bookmark(&self, id: &str) -> CliResult<Vec<Bookmark>> {
        let mut shelf = self.bookmarks();
        if shelf.get(id)?.is_none() {
            return Err(CliError::NotFound(format!("bookmark {id}")));
        }
        Ok(shelf.remove(id)?)
    }

    pub fn history_entry(&self, id: &str) -> CliResult<HistoryItem> {
        self.history()
            .get(id)?
            .ok_or_else(|| CliError::NotFound(format!("history entry {id}")))
    }

    /// Catalog features, optionally limited to one category.
    pub fn features(&self, category: Option<Category>) -> Vec<FeatureListing> {
        SignatureCatalog::builtin()
            .iter()
            .filter(|s| category.map_or(true, |c| s.category() == c))
            .map(|s| FeatureListing {
                id: s.id().to_string(),
                category: s.category(),
                status: self.dataset.status_of(s.id()),
            })
            .collect()
    }
}
