//! File-store collaborator backing the `/files/` routes.
//!
//! The rest of the server treats the filesystem as an opaque byte store
//! with `exists`/`read`/`write`. Filenames arrive straight off the request
//! path, so resolution rejects anything that could reach outside the
//! serve root before touching the filesystem.

use std::path::{Component, Path, PathBuf};

use tokio::fs;

/// The slice of the filesystem the server is allowed to touch.
///
/// Holds only the root directory; clones are cheap and handed to each
/// connection task. The root is validated at startup (see
/// [`Config::new`](crate::config::Config::new)).
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

/// Why a store operation failed.
#[derive(Debug)]
pub enum StoreError {
    /// The filename was empty, absolute, or contained `.`/`..` segments.
    InvalidName,
    /// No file with that name under the root.
    NotFound,
    /// Any other filesystem failure.
    Io(std::io::Error),
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Maps a client-supplied filename to a path under the root.
    ///
    /// Only plain path segments are accepted; absolute names and `.`/`..`
    /// segments never reach the filesystem.
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let relative = Path::new(name);
        let plain_segments = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        if relative.is_absolute() || !plain_segments {
            return Err(StoreError::InvalidName);
        }

        Ok(self.root.join(relative))
    }

    /// Whether a file with this name exists under the root.
    pub async fn exists(&self, name: &str) -> bool {
        match self.resolve(name) {
            Ok(path) => fs::metadata(&path).await.is_ok(),
            Err(_) => false,
        }
    }

    /// Reads the whole file into memory.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;

        fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound
            } else {
                StoreError::Io(e)
            }
        })
    }

    /// Writes the whole file, creating it if missing and overwriting it
    /// otherwise.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;

        fs::write(&path, contents).await.map_err(StoreError::Io)
    }
}
