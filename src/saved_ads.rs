//! Saved ads bookmarks
//!
//! Keeps the list of saved ad units in memory and mirrors the whole list to
//! the key-value store as one JSON array on every change. Storage failures
//! are logged and swallowed: the list then silently looks empty (on load)
//! or the change silently fails to persist (on add/remove).

use crate::ad_unit::AdUnitRecord;
use crate::persistence::{KeyValueStore, PersistError};

/// Storage key holding the saved ads JSON array
pub const SAVED_ADS_KEY: &str = "com.mopub.adunitids";

pub struct SavedAdsStore<S: KeyValueStore> {
    storage: S,
    records: Vec<AdUnitRecord>,
    /// In-memory list may differ from what a previous `load_all` returned
    dirty: bool,
    last_persist_failed: bool,
}

impl<S: KeyValueStore> SavedAdsStore<S> {
    /// Create a store over `storage`. Nothing is read until `load_all`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            records: Vec::new(),
            dirty: false,
            last_persist_failed: false,
        }
    }

    /// Save `record`, replacing any record with the same id.
    ///
    /// The record always ends up at the tail of the list.
    pub fn add(&mut self, record: AdUnitRecord) {
        self.records.retain(|r| r.id != record.id);
        log::info!("Saving ad unit {} ({})", record.id, record.name);
        self.records.push(record);
        self.persist_logged();
        self.dirty = true;
    }

    /// Remove the record with the same id as `record`. No-op if absent.
    pub fn remove(&mut self, record: &AdUnitRecord) {
        self.remove_id(&record.id);
    }

    /// Remove the record with `id`. No-op if absent.
    pub fn remove_id(&mut self, id: &str) {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            log::debug!("Ad unit {id} is not saved, nothing to remove");
            return;
        };
        self.records.remove(index);
        log::info!("Removed saved ad unit {id}");
        self.persist_logged();
        self.dirty = true;
    }

    /// Reload the list from storage and return it.
    ///
    /// Missing or unreadable data yields an empty list. Always clears the
    /// dirty flag.
    pub fn load_all(&mut self) -> &[AdUnitRecord] {
        self.records = match self.read() {
            Ok(Some(records)) => {
                log::info!("Loaded {} saved ad units", records.len());
                records
            }
            Ok(None) => {
                log::info!("No saved ad units found");
                Vec::new()
            }
            Err(e) => {
                log::warn!("Discarding unreadable saved ad units: {e}");
                Vec::new()
            }
        };
        self.dirty = false;
        &self.records
    }

    /// Whether a snapshot taken from `load_all` may be stale
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current in-memory list
    pub fn records(&self) -> &[AdUnitRecord] {
        &self.records
    }

    /// Whether the most recent write to storage failed
    pub fn last_persist_failed(&self) -> bool {
        self.last_persist_failed
    }

    /// Backing key-value store
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read(&self) -> Result<Option<Vec<AdUnitRecord>>, PersistError> {
        match self.storage.get(SAVED_ADS_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        let json = serde_json::to_string(&self.records)?;
        self.storage.set(SAVED_ADS_KEY, &json)
    }

    fn persist_logged(&mut self) {
        match self.persist() {
            Ok(()) => {
                self.last_persist_failed = false;
                log::debug!("Saved ads persisted ({} entries)", self.records.len());
            }
            Err(e) => {
                self.last_persist_failed = true;
                log::warn!("Failed to persist saved ads: {e}");
            }
        }
    }
}
