//! Authorization-code verification against the OAuth provider.
//!
//! [`Verifier`] owns the outbound HTTP client and runs the two-step chain behind `/verify`:
//! trade the inbound authorization code for an access token, then fetch the player profile with
//! that token. Both steps fail into the shared [`Error`] taxonomy and the front end collapses
//! either failure into the same opaque client response.

// crates.io
use reqwest::{Client, StatusCode, redirect::Policy};
// self
use crate::{
	_prelude::*,
	auth::AuthSecret,
	config::Config,
	error::{ConfigError, ProtocolError, TransportError},
	profile::PlayerProfile,
};

const STUB_PLAYER_ID: &str = "Dummy";
const STUB_IMAGE_URL: &str =
	"https://www.google.com/images/branding/googlelogo/2x/googlelogo_color_272x92dp.png";

/// Decoded token endpoint response.
///
/// Only `access_token` matters to the verification chain; the remaining fields are surfaced in
/// debug logs for operators and otherwise dropped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenGrant {
	access_token: Option<String>,
	refresh_token: Option<String>,
	token_type: Option<String>,
	expires_in: Option<u64>,
}

/// Error payload the token endpoint attaches to rejections.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenRejection {
	error: Option<String>,
	error_description: Option<String>,
}

/// Performs the code exchange and profile fetch against the configured provider.
#[derive(Clone, Debug)]
pub struct Verifier {
	config: Config,
	http_client: Client,
}
impl Verifier {
	/// Builds a verifier from the provided configuration.
	///
	/// The outbound client carries the configured request timeout and never follows redirects;
	/// both provider endpoints must answer directly.
	pub fn new(config: Config) -> Result<Self, ConfigError> {
		let http_client = Client::builder()
			.timeout(config.request_timeout)
			.redirect(Policy::none())
			.build()
			.map_err(|e| ConfigError::HttpClientBuild { source: e })?;

		Ok(Self { config, http_client })
	}

	/// Runs the full verification chain for one authorization code.
	pub async fn verify(&self, code: &AuthSecret) -> Result<PlayerProfile> {
		let access_token = self.exchange_code(code).await?;

		self.fetch_profile(&access_token).await
	}

	/// Trades an authorization code for an access token at the token endpoint.
	///
	/// The code is forwarded as-is, empty included; rejecting junk is the provider's call, not
	/// the verifier's.
	pub async fn exchange_code(&self, code: &AuthSecret) -> Result<AuthSecret> {
		let form = [
			("code", code.expose()),
			("client_id", self.config.client_id.as_str()),
			("client_secret", self.config.client_secret.expose()),
			("redirect_uri", self.config.redirect_uri.as_str()),
			("grant_type", "authorization_code"),
		];
		let response = self
			.http_client
			.post(self.config.token_endpoint.clone())
			.form(&form)
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();
		let body = response.bytes().await.map_err(TransportError::from)?;

		if !status.is_success() {
			return Err(token_rejection(status, &body).into());
		}

		let grant = decode_json::<TokenGrant>(&body).map_err(|e| {
			ProtocolError::TokenResponseParse { source: e, status: status.as_u16() }
		})?;
		let Some(access_token) = grant.access_token else {
			return Err(ProtocolError::MissingAccessToken.into());
		};

		tracing::debug!(
			token_type = grant.token_type.as_deref().unwrap_or("unknown"),
			expires_in = grant.expires_in,
			refresh_token_issued = grant.refresh_token.is_some(),
			"Exchanged the authorization code for an access token."
		);

		Ok(AuthSecret::new(access_token))
	}

	/// Fetches the player profile with a bearer access token.
	pub async fn fetch_profile(&self, access_token: &AuthSecret) -> Result<PlayerProfile> {
		let response = self
			.http_client
			.get(self.config.profile_endpoint.clone())
			.bearer_auth(access_token.expose())
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();
		let body = response.bytes().await.map_err(TransportError::from)?;

		if !status.is_success() {
			return Err(ProtocolError::ProfileRejected { status: status.as_u16() }.into());
		}

		let profile = decode_json::<PlayerProfile>(&body)
			.map_err(|e| ProtocolError::ProfileResponseParse { source: e })?;

		tracing::debug!(player_id = %profile.player_id, "Fetched the player profile.");

		Ok(profile)
	}

	/// Returns the canned profile when the inbound code matches the configured stub code.
	///
	/// Lets client integration run against the service without a provider round trip. Disabled
	/// unless the configuration names a stub code.
	pub fn stub_profile(&self, code: &AuthSecret) -> Option<PlayerProfile> {
		let stub_code = self.config.stub_code.as_deref()?;

		if code.expose() != stub_code {
			return None;
		}

		Some(PlayerProfile {
			player_id: STUB_PLAYER_ID.into(),
			avatar_image_url: STUB_IMAGE_URL.into(),
			banner_url_landscape: STUB_IMAGE_URL.into(),
			..PlayerProfile::default()
		})
	}
}

fn decode_json<T>(body: &[u8]) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
where
	T: for<'de> Deserialize<'de>,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
}

fn token_rejection(status: StatusCode, body: &[u8]) -> ProtocolError {
	let reason = decode_json::<TokenRejection>(body)
		.ok()
		.and_then(|rejection| match (rejection.error, rejection.error_description) {
			(Some(error), Some(description)) => Some(format!("{error} ({description})")),
			(Some(error), None) => Some(error),
			_ => None,
		})
		.unwrap_or_else(|| format!("status {status}"));

	ProtocolError::TokenRejected { status: status.as_u16(), reason }
}

#[cfg(test)]
mod tests {
	// std
	use std::net::SocketAddr;
	// self
	use super::*;

	fn config(stub_code: Option<&str>) -> Config {
		Config {
			client_id: "client".into(),
			client_secret: AuthSecret::new("secret"),
			redirect_uri: String::new(),
			token_endpoint: Url::parse("https://provider.example.com/token")
				.expect("Test token endpoint should parse."),
			profile_endpoint: Url::parse("https://provider.example.com/me")
				.expect("Test profile endpoint should parse."),
			listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
			request_timeout: Duration::from_secs(1),
			stub_code: stub_code.map(Into::into),
		}
	}

	#[test]
	fn stub_profile_requires_configuration_and_match() {
		let disabled = Verifier::new(config(None)).expect("Verifier should build.");

		assert_eq!(disabled.stub_profile(&AuthSecret::new("DummyAuthCode")), None);

		let enabled =
			Verifier::new(config(Some("DummyAuthCode"))).expect("Verifier should build.");

		assert_eq!(enabled.stub_profile(&AuthSecret::new("other-code")), None);

		let profile = enabled
			.stub_profile(&AuthSecret::new("DummyAuthCode"))
			.expect("Matching stub code should yield the canned profile.");

		assert_eq!(profile.player_id, STUB_PLAYER_ID);
		assert_eq!(profile.avatar_image_url, STUB_IMAGE_URL);
		assert_eq!(profile.banner_url_landscape, STUB_IMAGE_URL);
		assert!(profile.display_name.is_empty());
	}

	#[test]
	fn token_rejection_prefers_oauth_error_fields() {
		let rejection = token_rejection(
			StatusCode::BAD_REQUEST,
			br#"{"error":"invalid_grant","error_description":"code already redeemed"}"#,
		);

		assert!(matches!(
			rejection,
			ProtocolError::TokenRejected { status: 400, ref reason }
				if reason == "invalid_grant (code already redeemed)"
		));

		let rejection = token_rejection(StatusCode::UNAUTHORIZED, br#"{"error":"invalid_client"}"#);

		assert!(matches!(
			rejection,
			ProtocolError::TokenRejected { status: 401, ref reason } if reason == "invalid_client"
		));
	}

	#[test]
	fn token_rejection_falls_back_to_status() {
		let rejection = token_rejection(StatusCode::SERVICE_UNAVAILABLE, b"upstream melted");

		assert!(matches!(
			rejection,
			ProtocolError::TokenRejected { status: 503, ref reason }
				if reason == "status 503 Service Unavailable"
		));
	}
}
