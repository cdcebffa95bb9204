//! Command-line interface.
//!
//! age-github has no flags of its own: every argument is collected verbatim
//! and handed to age after `@handle` recipients are rewritten.

pub mod output;

use std::ffi::OsString;

use tracing::debug;

use crate::core::config::Config;
use crate::core::launch;
use crate::core::resolver::Github;
use crate::core::rewrite::rewrite;
use crate::error::{Error, Result};

/// Printed when age-github is run without arguments.
pub const USAGE: &str = "\
age-github wraps the age tool [1] so that GitHub user handles can be used as
-r recipients. It fetches the first SSH key published for the user and calls
age with that key in place of the handle.

Prefix handles with @. To encrypt a file for https://github.com/artyom, run

\tage-github -r @artyom ...

All other flags and arguments are passed to age unmodified.

[1]: https://filippo.io/age";

/// Arguments meant for age: everything after the program name, verbatim.
///
/// No token is interpreted here, `--` included; age sees exactly what the
/// user typed apart from rewritten recipients.
pub fn forwarded_args(argv: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    argv.into_iter().skip(1).collect()
}

/// Rewrite `args` and replace this process with age.
///
/// Only returns on failure.
pub fn execute(args: Vec<OsString>, config: &Config) -> Result<()> {
    if args.is_empty() {
        return Err(Error::Usage(USAGE));
    }

    // Fail on a missing tool before touching the network
    let tool = launch::locate(&config.tool)?;

    let cache = config.disk_cache();
    let resolver = Github::new(&config.keys_url, config.timeout, cache)?;

    let argv = rewrite(&tool, &args, &resolver)?;
    debug!(argc = argv.len(), "rewrote arguments");

    Err(launch::exec(tool, argv).into())
}
