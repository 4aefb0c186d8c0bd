//! Card Source
//!
//! Fetches carousel cards from a NocoDB v2 records endpoint:
//! - config: where to read from and with which credential
//! - item: wire records and the `DisplayItem` they map into
//! - error: user-facing failure classification
//! - loader: the one-shot fetch-and-map routine

mod config;
mod error;
mod item;
mod loader;

pub use config::{SourceConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::{ConfigError, LoadError};
pub use item::{parse_records, DisplayItem, RawRecord, PLACEHOLDER_IMAGE_URL};
pub use loader::{load_items, RecordsClient};
