//! Key list extraction from a `<user>.keys` payload.

use std::ffi::{OsStr, OsString};

use crate::core::constants::{KEY_PREFIX, MAX_KEYS};

/// Candidate public keys for a handle, in endpoint order.
///
/// Holds at most [`MAX_KEYS`] entries, each starting with `ssh-`. Keys keep
/// the bytes the endpoint sent, so they reach age unaltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList(Vec<OsString>);

impl KeyList {
    /// Key that gets handed to age.
    pub fn first(&self) -> Option<&OsStr> {
        self.0.first().map(OsString::as_os_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.0.iter().map(OsString::as_os_str)
    }
}

impl From<Vec<String>> for KeyList {
    fn from(keys: Vec<String>) -> Self {
        Self(keys.into_iter().map(OsString::from).collect())
    }
}

#[cfg(unix)]
fn key_from_bytes(line: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(line).to_os_string()
}

#[cfg(not(unix))]
fn key_from_bytes(line: &[u8]) -> OsString {
    String::from_utf8_lossy(line).into_owned().into()
}

/// Scan `data` line by line and collect lines starting with `ssh-`.
///
/// Lines end at `\n`; a trailing `\r` is dropped. A final line without a
/// newline still counts. Scanning stops after [`MAX_KEYS`] matches.
pub fn parse(data: &[u8]) -> KeyList {
    let mut keys = Vec::new();
    if data.is_empty() {
        return KeyList(keys);
    }
    let data = data.strip_suffix(b"\n").unwrap_or(data);

    for line in data.split(|&b| b == b'\n') {
        if keys.len() == MAX_KEYS {
            break;
        }
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.starts_with(KEY_PREFIX.as_bytes()) {
            keys.push(key_from_bytes(line));
        }
    }

    KeyList(keys)
}
