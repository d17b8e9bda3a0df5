// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Generic entity store.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::storage::port::StorePort;
use crate::types::Entity;

/// Ordered collection of one entity type, mirrored to a port.
///
/// Records keep insertion order. `index` maps each normalized key to the
/// position of the first record carrying it. Every mutation rewrites the
/// whole document through the port; if that write fails the error is
/// returned but the in-memory change stays applied.
pub struct EntityStore<T: Entity> {
    records: Vec<T>,
    index: FxHashMap<T::Key, usize>,
    port: Box<dyn StorePort>,
}

impl<T: Entity> EntityStore<T> {
    /// Loads the store from `port`, creating an empty document if the port
    /// holds none. Malformed JSON is returned as an error.
    pub fn open(port: Box<dyn StorePort>) -> Result<Self> {
        let loaded = port.load()?;
        let fresh = loaded.is_none();
        let records: Vec<T> = match loaded {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => Vec::new(),
        };

        let mut index = FxHashMap::default();
        for (pos, record) in records.iter().enumerate() {
            index.entry(record.key()).or_insert(pos);
        }

        let store = Self { records, index, port };
        if fresh {
            tracing::info!("No {} data at {}, creating it", T::NAME, store.port.describe());
            store.persist()?;
        } else {
            tracing::info!(
                "Loaded {} {} record(s) from {}",
                store.records.len(),
                T::NAME,
                store.port.describe()
            );
        }
        Ok(store)
    }

    // --- Read APIs ---

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    pub fn exists(&self, key: &T::Key) -> bool {
        self.index.contains_key(key)
    }

    /// Like [`exists`](Self::exists), ignoring the record keyed by `exclude`.
    pub fn exists_excluding(&self, key: &T::Key, exclude: &T::Key) -> bool {
        key != exclude && self.exists(key)
    }

    pub fn any(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.records.iter().any(pred)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // --- Write APIs ---

    /// Appends `record` and rewrites the document.
    pub fn add(&mut self, record: T) -> Result<&T> {
        let pos = self.records.len();
        self.index.entry(record.key()).or_insert(pos);
        self.records.push(record);
        self.persist()?;
        Ok(&self.records[pos])
    }

    /// Replaces the record keyed by `key` with `record`.
    ///
    /// Returns `Ok(false)` without touching the port when no record matches.
    /// The replacement may carry a different key; the index follows it.
    pub fn update(&mut self, key: &T::Key, record: T) -> Result<bool> {
        let Some(&pos) = self.index.get(key) else {
            return Ok(false);
        };

        let new_key = record.key();
        self.records[pos] = record;
        if &new_key != key {
            self.index.remove(key);
            self.index.entry(new_key).or_insert(pos);
        }

        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.records)?;
        self.port.save(&bytes)?;
        tracing::debug!(
            "Persisted {} {} record(s) to {}",
            self.records.len(),
            T::NAME,
            self.port.describe()
        );
        Ok(())
    }
}
