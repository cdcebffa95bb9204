//! Argument rewriting.
//!
//! Replaces `@handle` recipients with the first key resolved for the handle
//! and leaves every other argument alone. Two spellings are recognized:
//!
//! ```text
//! -r @alice           ->  -r 'ssh-ed25519 AAAA...'
//! --recipient=@alice  ->  -r 'ssh-ed25519 AAAA...'
//! ```

use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use crate::core::constants::{RECIPIENT_FLAG, RECIPIENT_FLAGS};
use crate::core::resolver::Resolver;
use crate::error::{Error, ResolveError, Result};

/// Whether `s` is one of age's recipient flag spellings.
pub fn is_recipient_flag(s: &str) -> bool {
    is_recipient_flag_bytes(s.as_bytes())
}

fn is_recipient_flag_bytes(token: &[u8]) -> bool {
    RECIPIENT_FLAGS.iter().any(|flag| flag.as_bytes() == token)
}

/// Build the argument vector for `tool` from the user's `args`.
///
/// The result starts with `tool` as argument zero. A token `@name` right
/// after a recipient flag is replaced in place by the first key of `name`.
/// A token `<flag>=@name` becomes the two tokens `-r` and that key.
/// Tokens are matched on their raw bytes, so arguments that are not valid
/// UTF-8 pass through unless they carry a placeholder.
///
/// # Errors
///
/// Returns `Error::Fetch` if a handle cannot be resolved and `Error::NoKeys`
/// if it resolves to no keys. Nothing is returned on the first failure.
pub fn rewrite(tool: &Path, args: &[OsString], resolver: &dyn Resolver) -> Result<Vec<OsString>> {
    let mut out = Vec::with_capacity(args.len() + 1);
    out.push(tool.as_os_str().to_os_string());

    for (i, arg) in args.iter().enumerate() {
        let token = arg.as_encoded_bytes();

        if let Some(handle) = token.strip_prefix(b"@") {
            if i > 0 && is_recipient_flag_bytes(args[i - 1].as_encoded_bytes()) {
                out.push(first_key(handle, resolver)?);
                continue;
            }
        }

        if let Some(eq) = token.iter().position(|&b| b == b'=') {
            let (flag, value) = (&token[..eq], &token[eq + 1..]);
            if is_recipient_flag_bytes(flag) {
                match value.strip_prefix(b"@") {
                    Some(handle) => {
                        out.push(OsStr::new(RECIPIENT_FLAG).to_os_string());
                        out.push(first_key(handle, resolver)?);
                    }
                    None => out.push(arg.clone()),
                }
                continue;
            }
        }

        out.push(arg.clone());
    }

    Ok(out)
}

fn first_key(handle: &[u8], resolver: &dyn Resolver) -> Result<OsString> {
    let handle = std::str::from_utf8(handle).map_err(|_| Error::Fetch {
        handle: String::from_utf8_lossy(handle).into_owned(),
        source: ResolveError::InvalidHandle,
    })?;

    let keys = resolver.resolve(handle).map_err(|source| Error::Fetch {
        handle: handle.to_string(),
        source,
    })?;

    let key = keys
        .first()
        .ok_or_else(|| Error::NoKeys(handle.to_string()))?;
    debug!(handle, key = ?key, "resolved recipient");
    Ok(key.to_os_string())
}
