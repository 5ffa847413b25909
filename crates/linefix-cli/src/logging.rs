// crates/linefix-cli/src/logging.rs

use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays clean for tool output.
/// Defaults to `warn`; override with `RUST_LOG` (e.g. `RUST_LOG=linefix_core=debug`).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
