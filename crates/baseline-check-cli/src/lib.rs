//! baseline-check CLI — analyze snippets, export reports, keep history and bookmarks.

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod render;
pub mod samples;
pub mod share;
pub mod storage;

pub use app::{App, FeatureListing};
pub use config::{load_dataset, resolve_data_dir, resolve_dataset_path};
pub use error::{CliError, CliResult};
pub use history::{Bookmark, BookmarkShelf, HistoryItem, HistoryLog};
pub use render::{Format, ListingArgs, TextOptions};
pub use samples::{find_sample, Sample, SAMPLES};
pub use storage::{FileStorage, MemoryStorage, Storage, StoreError};
