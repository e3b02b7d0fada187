//! Redacting wrappers for the bearer material moving through the verifier.

// self
use crate::_prelude::*;

/// Redacted secret wrapper keeping authorization codes, access tokens, and client secrets out of
/// logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSecret(String);
impl AuthSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when the wrapped value is the empty string.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for AuthSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<&str> for AuthSecret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl Debug for AuthSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthSecret").field(&"<redacted>").finish()
	}
}
impl Display for AuthSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
