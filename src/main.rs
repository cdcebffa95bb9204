//! age-github - use GitHub users as age recipients.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use age_github::cli::{execute, forwarded_args, output};
use age_github::core::config::Config;
use age_github::core::constants::ENV_LOG;
use age_github::error::Error;

fn main() {
    // Logs go to stderr; stdout is age's
    let filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("age_github=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config::from_env();

    if let Err(e) = execute(forwarded_args(std::env::args_os()), &config) {
        match e {
            Error::Usage(text) => output::usage(text),
            e => output::error(&e.to_string()),
        }
        std::process::exit(1);
    }
}
