//! Integration tests for the caller layer: file-backed history, bookmarks,
//! dataset overrides, share links and report listings.

use std::borrow::Cow;

use baseline_check::{BaselineDataset, SupportStatus};
use baseline_check_cli::history::{HISTORY_KEY, HISTORY_LIMIT};
use baseline_check_cli::render::{render, Format, SortArg, StatusArg};
use baseline_check_cli::share::{decode_fragment, encode_fragment};
use baseline_check_cli::{
    find_sample, load_dataset, App, CliError, FileStorage, HistoryItem, HistoryLog, ListingArgs,
    Storage, TextOptions,
};

// ─────────────────────── helpers ───────────────────────

fn file_app(dir: &tempfile::TempDir) -> App<FileStorage> {
    App::new(
        Cow::Borrowed(BaselineDataset::builtin()),
        FileStorage::new(dir.path().join("data")),
    )
}

// ─────────────────────── history ───────────────────────

#[test]
fn test_history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let code = "<dialog></dialog>";
    {
        let app = file_app(&dir);
        let result = app.analyze(code).unwrap();
        app.record(code, &result).unwrap();
    }

    let reopened = file_app(&dir);
    let items = reopened.history().list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].code, code);
    assert!(items[0].results.get("dialog").is_some());
    assert!(dir.path().join("data").join(format!("{HISTORY_KEY}.json")).exists());
}

#[test]
fn test_history_cap_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut log = HistoryLog::new(FileStorage::new(dir.path()));
    for i in 0..HISTORY_LIMIT + 3 {
        let item = HistoryItem::new(format!("fetch('/{i}')"), baseline_check::AnalysisResult::empty());
        log.record(item).unwrap();
    }
    let items = log.list().unwrap();
    assert_eq!(items.len(), HISTORY_LIMIT);
    assert_eq!(items[0].code, format!("fetch('/{}')", HISTORY_LIMIT + 2));
    assert_eq!(items.last().unwrap().code, "fetch('/3')");
}

#[test]
fn test_stored_results_are_validated() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    // Summary disagrees with the feature list.
    let tampered = serde_json::json!([{
        "id": "00000000-0000-4000-8000-000000000000",
        "code": ".a { display: grid }",
        "results": {
            "language": "CSS",
            "features": [{ "feature": "grid", "status": "baseline", "found": true }],
            "summary": { "total": 5, "baseline": 5, "needsFallback": 0, "unknown": 0 }
        },
        "timestamp": "2025-01-01T00:00:00Z",
        "preview": ".a { display: grid }"
    }]);
    storage.set(HISTORY_KEY, &tampered.to_string()).unwrap();

    let log = HistoryLog::new(storage);
    assert!(log.list().unwrap().is_empty());
}

// ─────────────────────── bookmarks ───────────────────────

#[test]
fn test_bookmark_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir);

    let first = app.add_bookmark("layout", ".a { display: grid }").unwrap();
    let second = app.add_bookmark("network", "fetch('/api')").unwrap();

    let listed = app.bookmarks().list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[0].name, "network");

    let remaining = app.remove_bookmark(&second.id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, first.id);

    assert!(matches!(
        app.remove_bookmark("missing"),
        Err(CliError::NotFound(_))
    ));
}

#[test]
fn test_blank_bookmark_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir);
    let err = app.add_bookmark("empty", "\n\n").unwrap_err();
    assert_eq!(err.to_string(), "Please enter some code to analyze");
    assert!(app.bookmarks().list().unwrap().is_empty());
}

// ─────────────────────── dataset override ───────────────────────

#[test]
fn test_custom_dataset_changes_classification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    std::fs::write(&path, r#"{"grid": false, "css-grid": null}"#).unwrap();

    let dataset = load_dataset(Some(&path)).unwrap();
    let app = App::new(dataset, FileStorage::new(dir.path().join("data")));
    let result = app.analyze(".a { display: grid }").unwrap();
    assert_eq!(result.get("grid").unwrap().status, SupportStatus::NeedsFallback);
    assert_eq!(result.get("css-grid").unwrap().status, SupportStatus::Unknown);
}

#[test]
fn test_invalid_dataset_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        load_dataset(Some(&path)),
        Err(CliError::Baseline(_))
    ));
}

// ─────────────────────── share links ───────────────────────

#[test]
fn test_share_round_trip_then_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir);
    let code = "<details><summary>Hi</summary></details>\n.a { aspect-ratio: 1 }";

    let link = format!("https://example.com/#{}", encode_fragment(code));
    let decoded = decode_fragment(&link).unwrap();
    assert_eq!(decoded, code);

    let result = app.analyze(&decoded).unwrap();
    assert!(result.get("details").is_some());
}

// ─────────────────────── report listings ───────────────────────

#[test]
fn test_stored_entry_listing() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir);
    let code = find_sample("css").unwrap().code;
    let item = {
        let result = app.analyze(code).unwrap();
        app.record(code, &result).unwrap()
    };

    let stored = file_app(&dir).history_entry(&item.id).unwrap();
    let listing = ListingArgs {
        status: Some(StatusArg::Baseline),
        search: Some("GRID".to_string()),
        sort: Some(SortArg::Feature),
        page: None,
    };
    let options = TextOptions {
        with_docs: false,
        listing: listing.to_query(),
    };
    let report = render(&stored.results, Format::Text, &options).unwrap();

    let listed: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("  "))
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert!(listed.contains(&"grid"));
    assert!(listed.iter().all(|id| id.contains("grid")));
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
    assert!(!report.contains("aspect-ratio"));
}

#[test]
fn test_listing_page_past_the_end() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir);
    let result = app.analyze(find_sample("javascript").unwrap().code).unwrap();
    let options = TextOptions {
        with_docs: false,
        listing: ListingArgs {
            page: Some(99),
            ..ListingArgs::default()
        }
        .to_query(),
    };
    let report = render(&result, Format::Text, &options).unwrap();
    assert!(report.contains("Showing 0 of"));
    assert!(report.contains("(page 99 of "));

    // Exports ignore the listing and keep every feature.
    let json = render(&result, Format::Json, &options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["features"].as_array().unwrap().len(), result.features().len());
}
