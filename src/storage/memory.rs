// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::{Arc, RwLock};

use crate::error::{NutriError, Result};
use crate::storage::port::StorePort;

/// In-memory port.
///
/// Clones share the same document, so a store reopened over a clone sees
/// what the previous store saved.
#[derive(Clone, Default)]
pub struct MemoryPort {
    data: Arc<RwLock<Option<Vec<u8>>>>,
    fail_saves: Arc<RwLock<bool>>,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Port that already holds `bytes`.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let port = Self::new();
        if let Ok(mut guard) = port.data.write() {
            *guard = Some(bytes.into());
        }
        port
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.data.read().ok().and_then(|guard| guard.clone())
    }

    /// Makes every following save fail, simulating a full disk.
    pub fn fail_saves(&self, fail: bool) {
        if let Ok(mut guard) = self.fail_saves.write() {
            *guard = fail;
        }
    }
}

impl StorePort for MemoryPort {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        let guard = self
            .data
            .read()
            .map_err(|_| NutriError::Persistence("memory port poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        if self.fail_saves.read().map(|g| *g).unwrap_or(false) {
            return Err(NutriError::Persistence("save rejected".into()));
        }
        let mut guard = self
            .data
            .write()
            .map_err(|_| NutriError::Persistence("memory port poisoned".into()))?;
        *guard = Some(bytes.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
