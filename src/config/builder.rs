// self
use crate::{_prelude::*, auth::Secret, config::TokenEndpointConfig, error::ConfigError};

/// Builder for [`TokenEndpointConfig`] values.
#[derive(Debug)]
pub struct TokenEndpointConfigBuilder {
	/// Route the token endpoint is mounted at.
	pub token_path: String,
	/// Route reserved for token revocation.
	pub revoke_path: String,
	/// Issuer embedded into minted tokens.
	pub issuer: String,
	/// Audience embedded into minted tokens.
	pub audience: String,
	/// Whether client verification runs for non-refresh grants.
	pub require_client_verification: bool,
	/// Lifetime of minted access tokens.
	pub access_token_lifetime: Duration,
	/// Lifetime of minted refresh tokens.
	pub refresh_token_lifetime: Duration,
	/// Key material forwarded to the minting collaborator.
	pub signing_secret: Secret,
}
impl TokenEndpointConfigBuilder {
	/// Creates a new builder seeded with defaults for every optional setting.
	pub fn new(
		issuer: impl Into<String>,
		audience: impl Into<String>,
		signing_secret: impl Into<Secret>,
	) -> Self {
		Self {
			token_path: TokenEndpointConfig::DEFAULT_TOKEN_PATH.into(),
			revoke_path: TokenEndpointConfig::DEFAULT_REVOKE_PATH.into(),
			issuer: issuer.into(),
			audience: audience.into(),
			require_client_verification: false,
			access_token_lifetime: TokenEndpointConfig::DEFAULT_ACCESS_TOKEN_LIFETIME,
			refresh_token_lifetime: TokenEndpointConfig::DEFAULT_REFRESH_TOKEN_LIFETIME,
			signing_secret: signing_secret.into(),
		}
	}

	/// Overrides the token route.
	pub fn token_path(mut self, path: impl Into<String>) -> Self {
		self.token_path = path.into();

		self
	}

	/// Overrides the revocation route.
	pub fn revoke_path(mut self, path: impl Into<String>) -> Self {
		self.revoke_path = path.into();

		self
	}

	/// Enables or disables client verification for non-refresh grants.
	pub fn require_client_verification(mut self, required: bool) -> Self {
		self.require_client_verification = required;

		self
	}

	/// Overrides the access token lifetime.
	pub fn access_token_lifetime(mut self, lifetime: Duration) -> Self {
		self.access_token_lifetime = lifetime;

		self
	}

	/// Overrides the refresh token lifetime.
	pub fn refresh_token_lifetime(mut self, lifetime: Duration) -> Self {
		self.refresh_token_lifetime = lifetime;

		self
	}

	/// Validates the settings and produces the immutable configuration.
	pub fn build(self) -> Result<TokenEndpointConfig> {
		validate_path("token", &self.token_path)?;
		validate_path("revoke", &self.revoke_path)?;

		if self.issuer.trim().is_empty() {
			return Err(ConfigError::EmptyField { field: "issuer" }.into());
		}
		if self.audience.trim().is_empty() {
			return Err(ConfigError::EmptyField { field: "audience" }.into());
		}
		if self.signing_secret.is_empty() {
			return Err(ConfigError::MissingSigningSecret.into());
		}
		validate_lifetime("access", self.access_token_lifetime)?;
		validate_lifetime("refresh", self.refresh_token_lifetime)?;

		Ok(TokenEndpointConfig {
			token_path: self.token_path,
			revoke_path: self.revoke_path,
			issuer: self.issuer,
			audience: self.audience,
			require_client_verification: self.require_client_verification,
			access_token_lifetime: self.access_token_lifetime,
			refresh_token_lifetime: self.refresh_token_lifetime,
			signing_secret: self.signing_secret,
		})
	}
}

fn validate_path(route: &'static str, path: &str) -> Result<(), ConfigError> {
	if path.starts_with('/') {
		Ok(())
	} else {
		Err(ConfigError::InvalidPath { route, path: path.to_owned() })
	}
}

fn validate_lifetime(token: &'static str, lifetime: Duration) -> Result<(), ConfigError> {
	let max = TokenEndpointConfig::MAX_TOKEN_LIFETIME;

	if !lifetime.is_positive() {
		Err(ConfigError::NonPositiveLifetime { token })
	} else if lifetime > max {
		Err(ConfigError::ExcessiveLifetime { token, max })
	} else {
		Ok(())
	}
}
