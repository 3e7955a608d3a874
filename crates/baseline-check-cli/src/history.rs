//! Analysis history and bookmarks.
//!
//! Both lists are stored newest first under a single storage key each and
//! are de-duplicated by entry id. History is capped; bookmarks are not.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use baseline_check::AnalysisResult;

use crate::storage::{Storage, StoreResult};

pub const HISTORY_KEY: &str = "baseline-history";
pub const BOOKMARKS_KEY: &str = "baseline-bookmarks";

/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 50;

/// Characters of code shown in a preview.
pub const PREVIEW_CHARS: usize = 100;

/// First [`PREVIEW_CHARS`] characters of `code`, with `...` when truncated.
pub fn preview(code: &str) -> String {
    let mut chars = code.char_indices();
    match chars.nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &code[..cut]),
        None => code.to_string(),
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// One recorded analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub code: String,
    pub results: AnalysisResult,
    pub timestamp: DateTime<Utc>,
    pub preview: String,
}

impl HistoryItem {
    pub fn new(code: impl Into<String>, results: AnalysisResult) -> Self {
        let code = code.into();
        Self {
            id: new_id(),
            preview: preview(&code),
            code,
            results,
            timestamp: Utc::now(),
        }
    }
}

/// A named, saved snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub code: String,
    pub results: Option<AnalysisResult>,
    pub timestamp: DateTime<Utc>,
    pub preview: String,
}

impl Bookmark {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        results: Option<AnalysisResult>,
    ) -> Self {
        let code = code.into();
        Self {
            id: new_id(),
            name: name.into(),
            preview: preview(&code),
            code,
            results,
            timestamp: Utc::now(),
        }
    }
}

/// Read a stored list. Unreadable contents are logged and treated as empty.
fn load_list<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> StoreResult<Vec<T>> {
    match storage.get_json::<Vec<T>>(key) {
        Ok(list) => Ok(list.unwrap_or_default()),
        Err(crate::storage::StoreError::Json(e)) => {
            tracing::warn!("Ignoring unreadable {key}: {e}");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Put `entry` at the front, dropping any older entry with the same id.
fn push_front<T>(list: Vec<T>, entry: T, id_of: impl Fn(&T) -> &str) -> Vec<T> {
    let id = id_of(&entry).to_string();
    std::iter::once(entry)
        .chain(list.into_iter().filter(|e| id_of(e) != id))
        .collect()
}

/// Recent analyses, newest first.
#[derive(Debug)]
pub struct HistoryLog<S> {
    storage: S,
}

impl<S: Storage> HistoryLog<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> StoreResult<Vec<HistoryItem>> {
        load_list(&self.storage, HISTORY_KEY)
    }

    /// Record an entry and return the updated list.
    pub fn record(&mut self, item: HistoryItem) -> StoreResult<Vec<HistoryItem>> {
        let mut items = push_front(self.list()?, item, |h| h.id.as_str());
        items.truncate(HISTORY_LIMIT);
        self.storage.set_json(HISTORY_KEY, &items)?;
        tracing::info!("History now holds {} entries", items.len());
        Ok(items)
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<HistoryItem>> {
        Ok(self.list()?.into_iter().find(|h| h.id == id))
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.storage.remove(HISTORY_KEY)?;
        tracing::info!("History cleared");
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

/// Saved snippets, newest first.
#[derive(Debug)]
pub struct BookmarkShelf<S> {
    storage: S,
}

impl<S: Storage> BookmarkShelf<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> StoreResult<Vec<Bookmark>> {
        load_list(&self.storage, BOOKMARKS_KEY)
    }

    /// Save a bookmark and return the updated list.
    pub fn save(&mut self, bookmark: Bookmark) -> StoreResult<Vec<Bookmark>> {
        let bookmarks = push_front(self.list()?, bookmark, |b| b.id.as_str());
        self.storage.set_json(BOOKMARKS_KEY, &bookmarks)?;
        tracing::info!("Saved bookmark ({} total)", bookmarks.len());
        Ok(bookmarks)
    }

    /// Remove a bookmark by id and return the remaining list.
    pub fn remove(&mut self, id: &str) -> StoreResult<Vec<Bookmark>> {
        let before = self.list()?;
        let count = before.len();
        let bookmarks: Vec<Bookmark> = before.into_iter().filter(|b| b.id != id).collect();
        if bookmarks.len() == count {
            tracing::warn!("No bookmark with id {id}");
        }
        self.storage.set_json(BOOKMARKS_KEY, &bookmarks)?;
        Ok(bookmarks)
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<Bookmark>> {
        Ok(self.list()?.into_iter().find(|b| b.id == id))
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn item(code: &str) -> HistoryItem {
        HistoryItem::new(code, AnalysisResult::empty())
    }

    #[test]
    fn test_preview_truncation() {
        assert_eq!(preview("short"), "short");
        let exact = "a".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);
        let long = "b".repeat(PREVIEW_CHARS + 1);
        assert_eq!(preview(&long), format!("{}...", "b".repeat(PREVIEW_CHARS)));
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let code = "é".repeat(150);
        let p = preview(&code);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 3);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_history_newest_first() {
        let mut log = HistoryLog::new(MemoryStorage::new());
        log.record(item("first")).unwrap();
        let items = log.record(item("second")).unwrap();
        assert_eq!(items[0].code, "second");
        assert_eq!(items[1].code, "first");
    }

    #[test]
    fn test_history_cap() {
        let mut log = HistoryLog::new(MemoryStorage::new());
        for i in 0..HISTORY_LIMIT + 5 {
            log.record(item(&format!("snippet {i}"))).unwrap();
        }
        let items = log.list().unwrap();
        assert_eq!(items.len(), HISTORY_LIMIT);
        assert_eq!(items[0].code, format!("snippet {}", HISTORY_LIMIT + 4));
    }

    #[test]
    fn test_history_dedup_by_id() {
        let mut log = HistoryLog::new(MemoryStorage::new());
        let mut entry = item("v1");
        log.record(entry.clone()).unwrap();
        log.record(item("other")).unwrap();
        entry.code = "v2".into();
        let items = log.record(entry.clone()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, entry.id);
        assert_eq!(items[0].code, "v2");
    }

    #[test]
    fn test_history_clear_and_get() {
        let mut log = HistoryLog::new(MemoryStorage::new());
        let entry = item("x");
        log.record(entry.clone()).unwrap();
        assert_eq!(log.get(&entry.id).unwrap(), Some(entry));
        log.clear().unwrap();
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_history_reads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "not json").unwrap();
        let log = HistoryLog::new(storage);
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn test_bookmarks_save_and_remove() {
        let mut shelf = BookmarkShelf::new(MemoryStorage::new());
        let a = Bookmark::new("grid demo", ".a { display: grid }", None);
        let b = Bookmark::new("fetch demo", "fetch('/x')", Some(AnalysisResult::empty()));
        shelf.save(a.clone()).unwrap();
        let all = shelf.save(b.clone()).unwrap();
        assert_eq!(all[0].id, b.id);
        assert_eq!(all.len(), 2);

        let remaining = shelf.remove(&b.id).unwrap();
        assert_eq!(remaining, vec![a.clone()]);
        assert_eq!(shelf.list().unwrap(), vec![a]);

        let unchanged = shelf.remove("missing").unwrap();
        assert_eq!(unchanged.len(), 1);
    }

    #[test]
    fn test_ids_are_uuids() {
        let entry = item("x");
        assert!(uuid::Uuid::parse_str(&entry.id).is_ok());
        assert_ne!(entry.id, item("x").id);
    }
}
