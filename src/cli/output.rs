//! Terminal output helpers.
//!
//! Everything goes to stderr: stdout belongs to age once the process is
//! replaced, and may carry ciphertext. Color respects NO_COLOR.

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print an error message to stderr (red prefix).
///
/// Example: `error: no keys found for github user "alice"`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("error:").for_stderr().red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print usage text to stderr.
pub fn usage(text: &str) {
    eprintln!("{}", text);
}
