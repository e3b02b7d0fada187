//! Environment-driven configuration assembled once at startup.
//!
//! Credentials are required; everything else carries a default so a bare deployment only needs
//! the client id/secret pair. A local `.env` file seeds the process environment when present,
//! and a missing file is not an error.

// std
use std::{env, net::SocketAddr};
// self
use crate::{_prelude::*, auth::AuthSecret, error::ConfigError};

/// Default OAuth 2.0 token endpoint receiving the code exchange.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
/// Default Play Games profile endpoint queried with the bearer token.
pub const DEFAULT_PROFILE_ENDPOINT: &str = "https://games.googleapis.com/games/v1/players/me";
/// Default socket address the HTTP server binds.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:60360";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const VAR_CLIENT_ID: &str = "GPGS_VERIFIER_CLIENT_ID";
const VAR_CLIENT_SECRET: &str = "GPGS_VERIFIER_CLIENT_SECRET";
const VAR_LISTEN_ADDR: &str = "GPGS_VERIFIER_LISTEN_ADDR";
const VAR_PROFILE_ENDPOINT: &str = "GPGS_VERIFIER_PROFILE_ENDPOINT";
const VAR_REDIRECT_URI: &str = "GPGS_VERIFIER_REDIRECT_URI";
const VAR_STUB_CODE: &str = "GPGS_VERIFIER_STUB_CODE";
const VAR_TIMEOUT_SECS: &str = "GPGS_VERIFIER_TIMEOUT_SECS";
const VAR_TOKEN_ENDPOINT: &str = "GPGS_VERIFIER_TOKEN_ENDPOINT";

/// Immutable service configuration shared by every request.
#[derive(Clone, Debug)]
pub struct Config {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: AuthSecret,
	/// Redirect URI echoed to the token endpoint; may be the empty string.
	pub redirect_uri: String,
	/// Token endpoint receiving the code exchange.
	pub token_endpoint: Url,
	/// Profile endpoint queried with the bearer token.
	pub profile_endpoint: Url,
	/// Socket address the HTTP server binds.
	pub listen_addr: SocketAddr,
	/// Timeout applied to each outbound provider call.
	pub request_timeout: Duration,
	/// Optional code answered with a canned profile instead of a provider round trip.
	pub stub_code: Option<String>,
}
impl Config {
	/// Loads configuration from the process environment, seeding it from `.env` first.
	pub fn from_env() -> Result<Self, ConfigError> {
		match dotenvy::dotenv() {
			Ok(path) =>
				tracing::debug!(path = %path.display(), "Loaded environment overrides from .env."),
			Err(e) if e.not_found() => (),
			Err(e) => tracing::warn!(error = %e, "Failed to load the local .env file."),
		}

		Self::load(|name| env::var(name).ok())
	}

	fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let required = |name: &'static str| {
			lookup(name).filter(|value| !value.is_empty()).ok_or(ConfigError::MissingVar { name })
		};
		let endpoint = |name: &'static str, default: &str| {
			let raw = lookup(name).filter(|value| !value.is_empty());
			let raw = raw.as_deref().unwrap_or(default);

			Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint { name, source: e })
		};
		let listen_addr = lookup(VAR_LISTEN_ADDR)
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into())
			.parse()
			.map_err(|e| ConfigError::InvalidListenAddr { name: VAR_LISTEN_ADDR, source: e })?;
		let timeout_secs = match lookup(VAR_TIMEOUT_SECS).filter(|value| !value.is_empty()) {
			Some(raw) => raw
				.parse()
				.map_err(|e| ConfigError::InvalidTimeout { name: VAR_TIMEOUT_SECS, source: e })?,
			None => DEFAULT_TIMEOUT_SECS,
		};

		Ok(Self {
			client_id: required(VAR_CLIENT_ID)?,
			client_secret: AuthSecret::new(required(VAR_CLIENT_SECRET)?),
			redirect_uri: lookup(VAR_REDIRECT_URI).unwrap_or_default(),
			token_endpoint: endpoint(VAR_TOKEN_ENDPOINT, DEFAULT_TOKEN_ENDPOINT)?,
			profile_endpoint: endpoint(VAR_PROFILE_ENDPOINT, DEFAULT_PROFILE_ENDPOINT)?,
			listen_addr,
			request_timeout: Duration::from_secs(timeout_secs),
			stub_code: lookup(VAR_STUB_CODE).filter(|value| !value.is_empty()),
		})
	}
}
