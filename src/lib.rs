//! Play Games auth-code verifier—exchange an OAuth 2.0 authorization code for an access token,
//! fetch the player profile, and echo identity headers from one small service.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod obs;
pub mod profile;
pub mod server;
pub mod verify;

#[cfg(test)] use httpmock as _;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
		time::Duration,
	};

	pub use reqwest::Error as ReqwestError;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}
