// self
use crate::{_prelude::*, auth::Secret};

/// Settings forwarded to the minting collaborator for a single issuance.
///
/// Built fresh for every grant from the shared [`TokenEndpointConfig`](super::TokenEndpointConfig)
/// so all expiry math within one request uses the same `issued_at` instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRequestConfig {
	/// Issuer embedded into minted tokens.
	pub issuer: String,
	/// Audience embedded into minted tokens.
	pub audience: String,
	/// Lifetime of the access token to mint.
	pub access_token_lifetime: Duration,
	/// Lifetime of the refresh token to mint.
	pub refresh_token_lifetime: Duration,
	/// Key material for signing; redacted in debug output.
	pub signing_secret: Secret,
	/// Issuance instant.
	pub issued_at: OffsetDateTime,
}
impl TokenRequestConfig {
	/// Expiry instant of the access token, clamped to the representable range.
	pub fn access_expires_at(&self) -> OffsetDateTime {
		self.issued_at.saturating_add(self.access_token_lifetime)
	}

	/// Expiry instant of the refresh token, clamped to the representable range.
	pub fn refresh_expires_at(&self) -> OffsetDateTime {
		self.issued_at.saturating_add(self.refresh_token_lifetime)
	}
}
