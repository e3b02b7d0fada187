//! Telemetry installation for the verifier binary.

// crates.io
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter honors `RUST_LOG` and falls back to `info`. The subscriber registers globally, so
/// only the binary entrypoint calls this.
pub fn init() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.compact()
		.init();
}
