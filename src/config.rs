//! Process-wide endpoint configuration and the per-issuance snapshot handed to minting
//! collaborators.
//!
//! [`TokenEndpointConfig`] is assembled once at startup, either through
//! [`TokenEndpointConfig::builder`] or from a JSON document via
//! [`TokenEndpointConfig::from_json_str`], and is shared read-only across requests.

mod builder;
mod request;

pub use builder::*;
pub use request::*;

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Immutable settings shared by every request the endpoint serves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenEndpointConfig {
	/// Route the token endpoint is mounted at.
	pub token_path: String,
	/// Route reserved for token revocation.
	pub revoke_path: String,
	/// Issuer embedded into minted tokens.
	pub issuer: String,
	/// Audience embedded into minted tokens.
	pub audience: String,
	/// Whether the client verifier runs for grants other than `refresh_token`.
	pub require_client_verification: bool,
	/// Lifetime of minted access tokens.
	pub access_token_lifetime: Duration,
	/// Lifetime of minted refresh tokens.
	pub refresh_token_lifetime: Duration,
	/// Key material forwarded to the minting collaborator; never inspected here.
	pub signing_secret: Secret,
}
impl TokenEndpointConfig {
	/// Default token route.
	pub const DEFAULT_TOKEN_PATH: &'static str = "/token";
	/// Default revocation route.
	pub const DEFAULT_REVOKE_PATH: &'static str = "/revoke-token";
	/// Default access token lifetime.
	pub const DEFAULT_ACCESS_TOKEN_LIFETIME: Duration = Duration::hours(1);
	/// Default refresh token lifetime.
	pub const DEFAULT_REFRESH_TOKEN_LIFETIME: Duration = Duration::days(14);
	/// Longest lifetime accepted for either token.
	pub const MAX_TOKEN_LIFETIME: Duration = Duration::days(3_650);

	/// Returns a builder seeded with the mandatory issuer, audience, and signing secret.
	pub fn builder(
		issuer: impl Into<String>,
		audience: impl Into<String>,
		signing_secret: impl Into<Secret>,
	) -> TokenEndpointConfigBuilder {
		TokenEndpointConfigBuilder::new(issuer, audience, signing_secret)
	}

	/// Parses and validates a JSON configuration document.
	///
	/// Lifetimes are expressed in seconds (`access_token_lifetime_secs`,
	/// `refresh_token_lifetime_secs`); every member other than `issuer`, `audience`, and
	/// `signing_secret` is optional.
	pub fn from_json_str(raw: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let document: ConfigDocument =
			serde_path_to_error::deserialize(&mut de).map_err(ConfigError::from)?;

		de.end().map_err(|source| ConfigError::Parse { path: ".".into(), source })?;

		document.into_builder().build()
	}

	/// Captures the settings forwarded to the minting collaborator for a single issuance.
	pub fn token_request(&self, issued_at: OffsetDateTime) -> TokenRequestConfig {
		TokenRequestConfig {
			issuer: self.issuer.clone(),
			audience: self.audience.clone(),
			access_token_lifetime: self.access_token_lifetime,
			refresh_token_lifetime: self.refresh_token_lifetime,
			signing_secret: self.signing_secret.clone(),
			issued_at,
		}
	}
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
	issuer: String,
	audience: String,
	signing_secret: Secret,
	#[serde(default)]
	token_path: Option<String>,
	#[serde(default)]
	revoke_path: Option<String>,
	#[serde(default)]
	require_client_verification: bool,
	#[serde(default)]
	access_token_lifetime_secs: Option<i64>,
	#[serde(default)]
	refresh_token_lifetime_secs: Option<i64>,
}
impl ConfigDocument {
	fn into_builder(self) -> TokenEndpointConfigBuilder {
		let mut builder =
			TokenEndpointConfig::builder(self.issuer, self.audience, self.signing_secret)
				.require_client_verification(self.require_client_verification);

		if let Some(path) = self.token_path {
			builder = builder.token_path(path);
		}
		if let Some(path) = self.revoke_path {
			builder = builder.revoke_path(path);
		}
		if let Some(secs) = self.access_token_lifetime_secs {
			builder = builder.access_token_lifetime(Duration::seconds(secs));
		}
		if let Some(secs) = self.refresh_token_lifetime_secs {
			builder = builder.refresh_token_lifetime(Duration::seconds(secs));
		}

		builder
	}
}
