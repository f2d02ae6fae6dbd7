//! Canary - saved ad unit bookmarks for the ad SDK test app
//!
//! Core modules:
//! - `ad_unit`: Saved ad unit records
//! - `ad_format`: Ad formats and their rendering screens
//! - `deep_link`: `mopub://load` link parsing
//! - `persistence`: Key-value preference storage backends
//! - `saved_ads`: The saved ads list, mirrored to storage
//! - `settings`: Persisted app preferences

pub mod ad_format;
pub mod ad_unit;
pub mod deep_link;
pub mod persistence;
pub mod saved_ads;
pub mod settings;

pub use ad_format::AdFormat;
pub use ad_unit::AdUnitRecord;
pub use deep_link::{DeepLink, DeepLinkError, parse_deep_link};
pub use persistence::{KeyValueStore, MemoryStore, PersistError};
pub use saved_ads::{SAVED_ADS_KEY, SavedAdsStore};
pub use settings::{LogLevel, Settings};
