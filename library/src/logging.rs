//! Diagnostics for the solution binaries.
//!
//! Logs go to stderr so stdout carries nothing but the answer.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level starts at `warn` and each
/// `-v` raises it one step (`info`, `debug`, `trace`).
///
/// # Example
/// ```bash
/// RUST_LOG=ps_scripts=trace cargo run --bin next-lex-permutation <<< 1442
/// ```
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
