//! Issued token payloads and user verification verdicts.

// self
use crate::{
	_prelude::*,
	auth::{ErrorPayload, Secret},
	error::GrantError,
};

/// Token pair minted by the user verifier and echoed back to the caller verbatim.
///
/// The endpoint never inspects the payload; `extra` carries whatever additional members
/// (`token_type`, `scope`, `id_token`, ...) the minting collaborator chooses to return.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedToken {
	/// Access token; callers must avoid logging it.
	pub access_token: Secret,
	/// Refresh token; callers must avoid logging it.
	pub refresh_token: Secret,
	/// Access token lifetime in seconds.
	pub expires_in: i64,
	/// Additional members serialized alongside the token pair.
	#[serde(flatten)]
	pub extra: JsonMap<String, JsonValue>,
}
impl IssuedToken {
	/// Creates a token pair whose access token expires after `expires_in`.
	pub fn new(
		access_token: impl Into<Secret>,
		refresh_token: impl Into<Secret>,
		expires_in: Duration,
	) -> Self {
		Self {
			access_token: access_token.into(),
			refresh_token: refresh_token.into(),
			expires_in: expires_in.whole_seconds(),
			extra: JsonMap::new(),
		}
	}

	/// Adds an extra member to the serialized payload.
	pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
		self.extra.insert(key.into(), value.into());

		self
	}
}
impl Debug for IssuedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IssuedToken")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.field("extra", &self.extra.keys().collect::<Vec<_>>())
			.finish()
	}
}

/// Verdict produced by a [`UserVerifier`](crate::verifier::UserVerifier).
#[derive(Clone, Debug, PartialEq)]
pub enum UserVerification {
	/// Credentials were accepted and a token pair was minted.
	Issued(IssuedToken),
	/// Credentials were rejected; the payload becomes the response body verbatim.
	Rejected(ErrorPayload),
}
impl UserVerification {
	/// Returns true if a token was issued.
	pub fn succeeded(&self) -> bool {
		matches!(self, UserVerification::Issued(_))
	}

	/// Converts the verdict into the grant state machine's result type.
	pub fn into_result(self) -> Result<IssuedToken, GrantError> {
		match self {
			UserVerification::Issued(token) => Ok(token),
			UserVerification::Rejected(payload) =>
				Err(GrantError::UserVerificationFailed(payload)),
		}
	}
}
