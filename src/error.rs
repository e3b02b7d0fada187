//! Service-wide error types shared by the verifier and the HTTP front end.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical service error exposed by public APIs.
///
/// The HTTP front end collapses [`Protocol`](Error::Protocol) and
/// [`Transport`](Error::Transport) failures into the same opaque client response; the split only
/// matters for server-side logs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or startup problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider answered, but with something the verifier cannot accept.
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and startup failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required environment variable is absent.
	#[error("Environment variable `{name}` is not set.")]
	MissingVar {
		/// Variable name as looked up in the environment.
		name: &'static str,
	},
	/// An endpoint override does not parse as a URL.
	#[error("Environment variable `{name}` is not a valid URL.")]
	InvalidEndpoint {
		/// Variable name as looked up in the environment.
		name: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The listen address override does not parse as a socket address.
	#[error("Environment variable `{name}` is not a valid socket address.")]
	InvalidListenAddr {
		/// Variable name as looked up in the environment.
		name: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: std::net::AddrParseError,
	},
	/// The timeout override does not parse as a number of seconds.
	#[error("Environment variable `{name}` is not a valid number of seconds.")]
	InvalidTimeout {
		/// Variable name as looked up in the environment.
		name: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: std::num::ParseIntError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: ReqwestError,
	},
}

/// Provider responses the verifier rejects.
#[derive(Debug, ThisError)]
pub enum ProtocolError {
	/// Token endpoint answered the exchange with a non-success status.
	#[error("Token endpoint rejected the exchange: {reason}.")]
	TokenRejected {
		/// HTTP status code returned by the endpoint.
		status: u16,
		/// Provider-supplied `error`/`error_description` pair, or a status fallback.
		reason: String,
	},
	/// Token endpoint answered with malformed JSON.
	#[error("Token endpoint returned malformed JSON.")]
	TokenResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code the body arrived with.
		status: u16,
	},
	/// Token endpoint response omitted the `access_token` field.
	#[error("Token endpoint response is missing access_token.")]
	MissingAccessToken,
	/// Profile endpoint answered with a non-success status.
	#[error("Profile endpoint rejected the request with status {status}.")]
	ProfileRejected {
		/// HTTP status code returned by the endpoint.
		status: u16,
	},
	/// Profile endpoint answered with malformed JSON.
	#[error("Profile endpoint returned malformed JSON.")]
	ProfileResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: ReqwestError,
	},
	/// Underlying IO failure surfaced while binding or serving.
	#[error("I/O error occurred while running the server.")]
	Io(#[from] std::io::Error),
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::Network { source: e }
	}
}
