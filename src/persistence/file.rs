//! Directory-backed storage: one JSON file per key.

use super::error::PersistError;
use super::storage::KeyValueStorage;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores each key as `<dir>/<key>.json`.
///
/// Characters outside `[A-Za-z0-9_-]` in a key become `_`, so `persist:root` lives in
/// `persist_root.json`. Writes go to a sibling `.tmp` file that is then renamed over the
/// target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_stem}.json"))
    }
}

fn io_error(key: &str, source: std::io::Error) -> PersistError {
    PersistError::Io {
        key: key.to_string(),
        source,
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), PersistError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).await.map_err(|e| io_error(key, e))?;
        fs::write(&tmp, value).await.map_err(|e| io_error(key, e))?;
        fs::rename(&tmp, &path).await.map_err(|e| io_error(key, e))?;

        debug!(path = %path.display(), "Wrote storage file");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PersistError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
