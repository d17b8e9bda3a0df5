use crate::error::{PersistenceError, Result};
use nutri_core::error::NutriResult;
use nutri_core::storage::StorePort;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// One entity document on disk.
///
/// Saves go to `<path>.tmp` first and are renamed over `path`, so a crash
/// mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// `None` when the file is missing or cannot be read. An unreadable
    /// file is treated as absent and gets replaced by the next write.
    pub fn read(&self) -> Option<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Cannot read {:?}, starting empty: {}", self.path, e);
                None
            }
        }
    }

    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| PersistenceError::InvalidPath(self.path.clone()))?;
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| PersistenceError::io(dir, e))?;
        }

        let tmp_path = self.tmp_path();
        {
            let mut file = File::create(&tmp_path).map_err(|e| PersistenceError::io(&tmp_path, e))?;
            file.write_all(bytes)
                .map_err(|e| PersistenceError::io(&tmp_path, e))?;
            file.sync_data()
                .map_err(|e| PersistenceError::io(&tmp_path, e))?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        tracing::debug!("Wrote {} bytes to {:?}", bytes.len(), self.path);
        Ok(())
    }
}

impl StorePort for JsonFile {
    fn load(&self) -> NutriResult<Option<Vec<u8>>> {
        Ok(self.read())
    }

    fn save(&self, bytes: &[u8]) -> NutriResult<()> {
        Ok(self.write(bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Directory holding one [`JsonFile`] per entity.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(&self, name: &str) -> JsonFile {
        JsonFile::new(self.root.join(name))
    }
}
