//! GitHub handle validation.
//!
//! A handle is accepted when it matches `^[A-Za-z][A-Za-z0-9_-]+$`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ResolveError;

static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]+$").expect("handle pattern is valid")
});

/// Check a string against the handle grammar.
pub fn is_valid(s: &str) -> bool {
    HANDLE_RE.is_match(s)
}

/// A validated GitHub user name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Validate `s` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidHandle` if `s` does not match the grammar.
    pub fn parse(s: &str) -> Result<Self, ResolveError> {
        if !is_valid(s) {
            return Err(ResolveError::InvalidHandle);
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
