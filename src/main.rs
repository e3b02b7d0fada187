//! Binary entrypoint wiring configuration, telemetry, and the HTTP server together.

// self
use gpgs_verifier::{config::Config, error::Result, obs, server::VerifyServer, verify::Verifier};

#[tokio::main]
async fn main() -> Result<()> {
	obs::init();

	let config = Config::from_env()?;
	let listen_addr = config.listen_addr;
	let verifier = Verifier::new(config)?;

	VerifyServer::new(verifier, listen_addr).run().await
}
