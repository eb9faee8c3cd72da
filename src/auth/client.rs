//! Client verification verdicts and the context threaded into password grants.

// self
use crate::{
	_prelude::*,
	auth::{ClientId, ErrorPayload},
	error::GrantError,
};

/// Verified client application, handed to the user verifier so issued tokens can be scoped
/// to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientContext {
	/// Verified client identifier.
	pub client_id: ClientId,
	/// Human-readable client name, if registered.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Additional verifier-defined attributes (client key, tenant, etc.).
	#[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
	pub attributes: JsonMap<String, JsonValue>,
}
impl ClientContext {
	/// Creates a context for the provided client.
	pub fn new(client_id: ClientId) -> Self {
		Self { client_id, name: None, attributes: JsonMap::new() }
	}

	/// Sets the display name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Adds a verifier-defined attribute.
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
		self.attributes.insert(key.into(), value.into());

		self
	}
}

/// Verdict produced by a [`ClientVerifier`](crate::verifier::ClientVerifier).
#[derive(Clone, Debug, PartialEq)]
pub enum ClientVerification {
	/// The client authenticated successfully.
	Verified(ClientContext),
	/// The client was rejected; the payload becomes the response body verbatim.
	Rejected(ErrorPayload),
}
impl ClientVerification {
	/// Returns true if the client was verified.
	pub fn succeeded(&self) -> bool {
		matches!(self, ClientVerification::Verified(_))
	}

	/// Converts the verdict into the grant state machine's result type.
	pub fn into_result(self) -> Result<ClientContext, GrantError> {
		match self {
			ClientVerification::Verified(context) => Ok(context),
			ClientVerification::Rejected(payload) =>
				Err(GrantError::ClientVerificationFailed(payload)),
		}
	}
}
