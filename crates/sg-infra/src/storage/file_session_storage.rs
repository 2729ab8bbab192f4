//! File-based session storage
//!
//! Implements [`SessionStoragePort`] with one file per key inside a data
//! directory. Writes go to a temporary file that is synced and renamed over
//! the target, so a crash never leaves a half-written credential behind.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use sg_core::ports::{SessionStoragePort, StorageError};

pub struct FileSessionStorage {
    base_dir: PathBuf,
}

impl FileSessionStorage {
    /// Create storage rooted at `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if !valid {
            return Err(StorageError::Other(format!("invalid storage key: {key:?}")));
        }
        Ok(self.base_dir.join(key))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| map_io_error("create storage directory", e))
    }
}

fn map_io_error(action: &str, err: io::Error) -> StorageError {
    let detail = format!("{action}: {err}");
    match err.kind() {
        io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(detail),
        io::ErrorKind::NotFound | io::ErrorKind::ReadOnlyFilesystem => {
            StorageError::Unavailable(detail)
        }
        io::ErrorKind::InvalidData => StorageError::Corrupt(detail),
        _ => StorageError::Other(detail),
    }
}

/// Write `value` to `tmp_path` (owner-only from creation on unix), sync it,
/// then rename it over `path`.
async fn write_replacing(tmp_path: &Path, path: &Path, value: &str) -> Result<(), StorageError> {
    // A leftover from a crash may carry a wider mode; never reuse it.
    match fs::remove_file(tmp_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(map_io_error("remove stale value file", e)),
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
        .open(tmp_path)
        .await
        .map_err(|e| map_io_error("create value file", e))?;
    file.write_all(value.as_bytes())
        .await
        .map_err(|e| map_io_error("write value file", e))?;
    file.sync_all()
        .await
        .map_err(|e| map_io_error("sync value file", e))?;
    drop(file);

    fs::rename(tmp_path, path)
        .await
        .map_err(|e| map_io_error("replace value file", e))
}

#[async_trait]
impl SessionStoragePort for FileSessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(map_io_error("read value", e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        self.ensure_base_dir().await?;

        let tmp_path = path.with_extension("tmp");
        if let Err(err) = write_replacing(&tmp_path, &path, value).await {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    warn!(error = %cleanup, "failed to remove temporary value file");
                }
            }
            return Err(err);
        }
        debug!(key, "stored value");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "deleted value");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error("delete value file", e)),
        }
    }
}
