//! Diagnostics for the `steply-mask` binary.
//!
//! Filtering follows `RUST_LOG` (`RUST_LOG=steply_mask=debug` shows every
//! recomputed mask value); the default level is `warn`. Output goes to
//! stderr so it never mixes with formatted values on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
