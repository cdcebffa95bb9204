//! Fetched key payload cache.
//!
//! Maps a handle to the raw body last fetched for it. Caching is purely an
//! optimization: a miss falls through to the network and a failed write is
//! ignored by the caller.
//!
//! ## Backends
//!
//! - [`Disk`] stores one file per handle under the user cache directory and
//!   ignores entries older than an hour.
//! - [`Memory`] keeps entries in a map and never expires them.

use crate::error::CacheError;

mod fs;
mod memory;

pub use fs::{cache_key, Disk};
pub use memory::Memory;

/// Key payload cache.
pub trait Cache {
    /// Look up the payload stored for `handle`.
    ///
    /// # Returns
    ///
    /// The stored bytes, or `None` when absent, unreadable or stale.
    fn get(&self, handle: &str) -> Option<Vec<u8>>;

    /// Store `data` as the payload for `handle`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the entry could not be written. Callers log
    /// and drop it.
    fn put(&self, handle: &str, data: &[u8]) -> Result<(), CacheError>;
}
