//! Tool lookup and process replacement.
//!
//! On Unix the wrapper execs age in place. Elsewhere age runs as a child
//! with inherited stdio and its exit code is passed through.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::LaunchError;

/// Locate `tool` on `PATH`, or check it directly if it contains a path
/// separator.
///
/// # Errors
///
/// Returns `LaunchError::NotFound` if no executable matches.
pub fn locate(tool: &str) -> Result<PathBuf, LaunchError> {
    let path = which::which(tool).map_err(|source| LaunchError::NotFound {
        tool: tool.to_string(),
        source,
    })?;
    debug!(tool, path = %path.display(), "located tool");
    Ok(path)
}

/// Replace the current process with `path`, passing `argv` (argument zero
/// included) and the current environment.
///
/// Only returns if the tool could not be started.
pub fn exec(path: PathBuf, argv: Vec<OsString>) -> LaunchError {
    let mut argv = argv.into_iter();
    let arg0 = argv.next().unwrap_or_else(|| path.clone().into_os_string());

    let mut cmd = Command::new(&path);
    cmd.args(argv);
    debug!(path = %path.display(), "executing tool");

    replace(cmd, arg0, path)
}

#[cfg(unix)]
fn replace(mut cmd: Command, arg0: OsString, path: PathBuf) -> LaunchError {
    use std::os::unix::process::CommandExt;

    let source = cmd.arg0(arg0).exec();
    LaunchError::Exec { path, source }
}

#[cfg(not(unix))]
fn replace(mut cmd: Command, _arg0: OsString, path: PathBuf) -> LaunchError {
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) => return LaunchError::Exec { path, source },
    };

    match child.wait() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => LaunchError::Wait { path, source },
    }
}
