//! Error types for age-github.
//!
//! Every failure except a cache write is terminal: it is printed on stderr
//! and the process exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(&'static str),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("fetching keys for github user {handle:?}: {source}")]
    Fetch {
        handle: String,
        #[source]
        source: ResolveError,
    },

    #[error("no keys found for github user {0:?}")]
    NoKeys(String),

    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors from resolving a handle to its public keys.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("not a valid github user name")]
    InvalidHandle,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response code {0:?}")]
    Status(String),

    #[error("unexpected content type {0:?}")]
    ContentType(String),

    #[error("reading response: {0}")]
    Read(#[from] std::io::Error),
}

/// Errors from locating or starting the wrapped tool.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("{tool}: executable file not found in $PATH")]
    NotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    #[error("exec {}: {source}", path.display())]
    Exec {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("waiting for {}: {source}", path.display())]
    Wait {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Cache write failures. Never surfaced to the user.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("creating cache directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing cache file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
