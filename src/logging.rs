//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with the prompts on stdout. `RUST_LOG`
//! takes precedence; otherwise `--verbose` switches the crate to `debug`.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "commits_assistant=debug"
    } else {
        "commits_assistant=warn"
    }
}

/// Installs the global `tracing` subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
