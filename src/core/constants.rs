//! Constants used throughout age-github.
//!
//! Centralizes magic strings and limits.

use std::time::Duration;

/// Name of the wrapped tool, looked up on `PATH`.
pub const TOOL: &str = "age";

/// Base URL of the per-user key listing endpoint.
pub const KEYS_URL: &str = "https://github.com";

/// Cache subdirectory under the user cache root.
pub const CACHE_SUBDIR: &str = "age-github";

/// Cached entries older than this are ignored.
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Deadline for resolving a single handle.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Bytes of response body read from the key endpoint; the rest is dropped.
pub const MAX_BODY: u64 = 1 << 18;

/// Upper bound on candidate keys collected per handle.
pub const MAX_KEYS: usize = 10;

/// Prefix of an accepted key line.
pub const KEY_PREFIX: &str = "ssh-";

/// Recipient flag spellings understood by age.
pub const RECIPIENT_FLAGS: &[&str] = &["-r", "--r", "-recipient", "--recipient"];

/// Flag emitted in front of a key resolved from `flag=@handle`.
pub const RECIPIENT_FLAG: &str = "-r";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "AGE_GITHUB_LOG";

/// Environment variable overriding the wrapped tool.
pub const ENV_TOOL: &str = "AGE_GITHUB_AGE";

/// Environment variable overriding the key endpoint base URL.
pub const ENV_KEYS_URL: &str = "AGE_GITHUB_KEYS_URL";

/// Environment variable overriding the cache directory. Empty disables caching.
pub const ENV_CACHE_DIR: &str = "AGE_GITHUB_CACHE_DIR";

/// `User-Agent` sent to the key endpoint.
pub const USER_AGENT: &str = concat!("age-github/", env!("CARGO_PKG_VERSION"));
