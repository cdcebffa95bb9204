//! Handle to public key resolution.
//!
//! Looks in the cache first, then fetches `<base>/<handle>.keys` and caches
//! the raw body on success.

use std::io::Read;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, trace};

use crate::core::cache::Cache;
use crate::core::constants::{MAX_BODY, USER_AGENT};
use crate::core::handle::Handle;
use crate::core::keys::{self, KeyList};
use crate::error::ResolveError;

/// Resolves a handle to its candidate public keys.
pub trait Resolver {
    /// Return the keys published for `handle`, possibly none.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` if the handle is malformed or the keys could
    /// not be fetched.
    fn resolve(&self, handle: &str) -> Result<KeyList, ResolveError>;
}

/// Resolver backed by the GitHub `.keys` endpoint.
pub struct Github<C: Cache> {
    client: Client,
    base_url: String,
    timeout: Duration,
    cache: C,
}

impl<C: Cache> Github<C> {
    /// Create a resolver for `base_url` (e.g. `https://github.com`).
    ///
    /// # Errors
    ///
    /// Returns the client error if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration, cache: C) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            cache,
        })
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Fetch the capped raw body for `handle`.
    fn fetch(&self, handle: &Handle, deadline: Instant) -> Result<Vec<u8>, ResolveError> {
        let url = format!("{}/{}.keys", self.base_url, handle);
        debug!(%url, "fetching keys");

        let response = self
            .client
            .get(&url)
            .timeout(deadline.saturating_duration_since(Instant::now()))
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ResolveError::Status(status.to_string()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();
        if !content_type.starts_with("text/plain") {
            return Err(ResolveError::ContentType(content_type));
        }

        let mut data = Vec::new();
        response.take(MAX_BODY).read_to_end(&mut data)?;
        trace!(bytes = data.len(), "read key listing");
        Ok(data)
    }
}

impl<C: Cache> Resolver for Github<C> {
    fn resolve(&self, handle: &str) -> Result<KeyList, ResolveError> {
        let handle = Handle::parse(handle)?;
        let deadline = Instant::now() + self.timeout;

        if let Some(data) = self.cache.get(handle.as_str()) {
            debug!(%handle, "using cached keys");
            return Ok(keys::parse(&data));
        }
        debug!(%handle, "no cached keys");

        let data = self.fetch(&handle, deadline)?;
        let keys = keys::parse(&data);
        trace!(%handle, count = keys.len(), "parsed keys");

        if let Err(e) = self.cache.put(handle.as_str(), &data) {
            debug!(error = %e, "ignoring cache write failure");
        }

        Ok(keys)
    }
}
