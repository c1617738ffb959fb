//! Log subscriber setup.
//!
//! Level comes from `RUST_LOG` when set, otherwise `warn` (or `debug` with
//! `--verbose`). Logs go to stderr so JSON on stdout stays clean.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) is harmless
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
