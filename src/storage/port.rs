// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::Result;

/// Backing storage for a single entity store.
///
/// A port holds one opaque document: the JSON array of every record of
/// one entity type. Stores always hand over the full document, never a
/// delta.
pub trait StorePort: Send + Sync {
    /// Reads the whole document. `Ok(None)` means nothing has been
    /// written yet.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the whole document.
    fn save(&self, bytes: &[u8]) -> Result<()>;

    /// Where the document lives, for log lines.
    fn describe(&self) -> String;
}
