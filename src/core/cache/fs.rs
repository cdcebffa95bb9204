//! Filesystem-based cache implementation.
//!
//! Entries live in `<user cache dir>/age-github/<sha1 hex of handle>`. The
//! file mtime records when the payload was fetched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use sha1::{Digest, Sha1};
use tracing::{debug, trace};

use super::Cache;
use crate::core::constants::{CACHE_SUBDIR, CACHE_TTL};
use crate::error::CacheError;

/// File name used for a handle's entry: lowercase hex SHA-1 of the handle.
pub fn cache_key(handle: &str) -> String {
    format!("{:x}", Sha1::digest(handle.as_bytes()))
}

/// Directory-backed cache.
///
/// A `Disk` without a directory is disabled: every lookup misses and every
/// write succeeds without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct Disk {
    dir: Option<PathBuf>,
}

impl Disk {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Cache under the per-user cache root, disabled if there is none.
    pub fn user_default() -> Self {
        Self {
            dir: dirs::cache_dir().map(|root| root.join(CACHE_SUBDIR)),
        }
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    fn entry_path(&self, handle: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(cache_key(handle)))
    }
}

/// Whether a file modified at `modified` has outlived the cache window.
fn is_stale(modified: SystemTime, now: SystemTime) -> bool {
    modified + CACHE_TTL < now
}

impl Cache for Disk {
    fn get(&self, handle: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(handle)?;
        let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;

        if is_stale(modified, SystemTime::now()) {
            trace!(path = %path.display(), "cache entry is stale");
            return None;
        }

        match fs::read(&path) {
            Ok(data) => Some(data),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cache read failed");
                None
            }
        }
    }

    fn put(&self, handle: &str, data: &[u8]) -> Result<(), CacheError> {
        let Some(dir) = self.dir.as_deref() else {
            return Ok(());
        };

        create_dir(dir).map_err(|source| CacheError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(cache_key(handle));
        write_file(&path, data).map_err(|source| CacheError::Write {
            path: path.clone(),
            source,
        })?;

        trace!(path = %path.display(), bytes = data.len(), "cache entry written");
        Ok(())
    }
}

fn create_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    // Permissions are left to the umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    builder.create(dir)
}

fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    let mut file = options.open(path)?;
    file.write_all(data)
}
