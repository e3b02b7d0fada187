//! HTTP front end exposing the `/verify` route.

// std
use std::net::SocketAddr;
// crates.io
use axum::{
	Router,
	extract::State,
	http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
	response::{IntoResponse, Response},
	routing::get,
};
use tokio::net::TcpListener;
// self
use crate::{
	_prelude::*, auth::AuthSecret, error::TransportError, profile::PlayerProfile, verify::Verifier,
};

/// Inbound header carrying the authorization code.
pub const AUTH_CODE_HEADER: &str = "auth-code";
/// Response header carrying the player identifier.
pub const PLAYER_ID_HEADER: &str = "player-id";
/// Response header carrying the avatar image URL.
pub const AVATAR_IMAGE_URL_HEADER: &str = "avatar-image-url";
/// Response header carrying the landscape banner URL.
pub const BANNER_URL_LANDSCAPE_HEADER: &str = "banner-url-landscape";

/// HTTP server owning a shared [`Verifier`] and the listen address.
///
/// Requests share nothing mutable: the router state is an `Arc` over the verifier, whose
/// configuration is immutable and whose HTTP client is internally reference-counted.
#[derive(Clone, Debug)]
pub struct VerifyServer {
	verifier: Arc<Verifier>,
	listen_addr: SocketAddr,
}
impl VerifyServer {
	/// Creates a server for the provided verifier and listen address.
	pub fn new(verifier: Verifier, listen_addr: SocketAddr) -> Self {
		Self { verifier: Arc::new(verifier), listen_addr }
	}

	/// Builds the router with `/verify` accepting both `GET` and `POST`.
	pub fn router(&self) -> Router {
		Router::new()
			.route("/verify", get(verify_handler).post(verify_handler))
			.with_state(self.verifier.clone())
	}

	/// Binds the listen address and serves requests until the process stops.
	pub async fn run(self) -> Result<()> {
		let listener = TcpListener::bind(self.listen_addr).await.map_err(TransportError::Io)?;
		let local_addr = listener.local_addr().map_err(TransportError::Io)?;

		tracing::info!(addr = %local_addr, "Listening for verification requests.");

		axum::serve(listener, self.router()).await.map_err(TransportError::Io)?;

		Ok(())
	}
}

/// Orchestrates one verification: read the code header, run the exchange + fetch chain, and map
/// the outcome onto the response.
///
/// Any verifier failure collapses into an empty 400; the error chain stays in the server logs.
async fn verify_handler(State(verifier): State<Arc<Verifier>>, headers: HeaderMap) -> Response {
	let code = auth_code(&headers);

	if code.is_empty() {
		// Still forwarded; the provider's rejection produces the client error.
		tracing::debug!("Inbound request carries no authorization code.");
	}
	if let Some(profile) = verifier.stub_profile(&code) {
		tracing::info!("Answering the configured stub code with a canned profile.");

		return profile_response(&profile);
	}

	match verifier.verify(&code).await {
		Ok(profile) => profile_response(&profile),
		Err(e) => {
			tracing::warn!(error = ?e, "Verification failed.");

			StatusCode::BAD_REQUEST.into_response()
		}
	}
}

fn auth_code(headers: &HeaderMap) -> AuthSecret {
	headers
		.get(AUTH_CODE_HEADER)
		.and_then(|value| value.to_str().ok())
		.unwrap_or_default()
		.into()
}

fn profile_response(profile: &PlayerProfile) -> Response {
	let mut headers = HeaderMap::new();

	for (name, value) in [
		(PLAYER_ID_HEADER, &profile.player_id),
		(AVATAR_IMAGE_URL_HEADER, &profile.avatar_image_url),
		(BANNER_URL_LANDSCAPE_HEADER, &profile.banner_url_landscape),
	] {
		let Ok(value) = HeaderValue::from_str(value) else {
			tracing::warn!(header = name, "Profile field is not a valid header value.");

			return StatusCode::BAD_REQUEST.into_response();
		};

		headers.insert(HeaderName::from_static(name), value);
	}

	(headers, "OK").into_response()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn profile() -> PlayerProfile {
		PlayerProfile {
			player_id: "123456789".into(),
			avatar_image_url: "https://cdn.example.com/avatar.png".into(),
			banner_url_landscape: "https://cdn.example.com/landscape.png".into(),
			..PlayerProfile::default()
		}
	}

	#[test]
	fn profile_response_echoes_identity_headers() {
		let response = profile_response(&profile());

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response.headers().get(PLAYER_ID_HEADER).map(|value| value.as_bytes()),
			Some("123456789".as_bytes())
		);
		assert_eq!(
			response.headers().get(AVATAR_IMAGE_URL_HEADER).map(|value| value.as_bytes()),
			Some("https://cdn.example.com/avatar.png".as_bytes())
		);
		assert_eq!(
			response.headers().get(BANNER_URL_LANDSCAPE_HEADER).map(|value| value.as_bytes()),
			Some("https://cdn.example.com/landscape.png".as_bytes())
		);
	}

	#[test]
	fn profile_response_rejects_unencodable_fields() {
		let mut profile = profile();

		profile.player_id = "line\nbreak".into();

		let response = profile_response(&profile);

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert!(response.headers().get(PLAYER_ID_HEADER).is_none());
	}

	#[test]
	fn auth_code_extraction_defaults_to_empty() {
		let mut headers = HeaderMap::new();

		assert!(auth_code(&headers).is_empty());

		headers.insert(
			HeaderName::from_static(AUTH_CODE_HEADER),
			HeaderValue::from_static("4/0Acode"),
		);

		assert_eq!(auth_code(&headers).expose(), "4/0Acode");
	}
}
