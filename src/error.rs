//! Endpoint-level error types shared across configuration, grants, and verifiers.

// self
use crate::{_prelude::*, auth::ErrorPayload};

/// Endpoint-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by setup APIs (configuration, identifiers, builders).
///
/// Request handling never surfaces this type; grant failures are expressed as [`GrantError`]
/// and rendered as `400 Bad Request`.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Identifier failed validation.
	#[error(transparent)]
	Identifier(#[from] crate::auth::IdentifierError),
}

/// Configuration and validation failures raised while assembling the endpoint.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration document could not be parsed.
	#[error("Configuration document is invalid at `{path}`.")]
	Parse {
		/// Path of the offending member inside the document.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
	/// Route path does not start with `/`.
	#[error("The {route} path `{path}` must start with `/`.")]
	InvalidPath {
		/// Route label (`token` or `revoke`).
		route: &'static str,
		/// Offending path.
		path: String,
	},
	/// Issuer or audience is blank.
	#[error("The {field} must not be empty.")]
	EmptyField {
		/// Field label.
		field: &'static str,
	},
	/// Signing secret is blank.
	#[error("Signing secret must not be empty.")]
	MissingSigningSecret,
	/// A token lifetime is zero or negative.
	#[error("The {token} token lifetime must be positive.")]
	NonPositiveLifetime {
		/// Token label (`access` or `refresh`).
		token: &'static str,
	},
	/// A token lifetime exceeds
	/// [`MAX_TOKEN_LIFETIME`](crate::config::TokenEndpointConfig::MAX_TOKEN_LIFETIME).
	#[error("The {token} token lifetime must not exceed {max}.")]
	ExcessiveLifetime {
		/// Token label (`access` or `refresh`).
		token: &'static str,
		/// Upper bound that was exceeded.
		max: Duration,
	},
	/// Client verification is required but no verifier was supplied.
	#[error("Client verification is enabled but no client verifier is configured.")]
	MissingClientVerifier,
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}

/// Terminal failures of the grant state machine; every variant renders as `400 Bad Request`.
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum GrantError {
	/// Wrong method or content type.
	#[error("Request must be a form-encoded POST.")]
	MalformedRequest,
	/// Missing, unknown, or ambiguous `grant_type`.
	#[error("Unsupported grant_type {value:?}.")]
	InvalidGrantType {
		/// Raw wire value, when one was present.
		value: Option<String>,
	},
	/// Client verifier rejected the calling application.
	#[error("Client verification failed: {0}.")]
	ClientVerificationFailed(ErrorPayload),
	/// User or refresh verifier rejected the credentials.
	#[error("User verification failed: {0}.")]
	UserVerificationFailed(ErrorPayload),
	/// Refresh verifier faulted instead of returning a verdict.
	#[error("Refresh verifier faulted: {message}.")]
	RefreshVerifierFault {
		/// Fault message echoed to the caller.
		message: String,
	},
}
impl GrantError {
	/// Generic message returned for malformed requests.
	pub const BAD_REQUEST_MESSAGE: &'static str = "Bad request..";
	/// Message returned for unrecognized grant types.
	pub const INVALID_GRANT_TYPE_MESSAGE: &'static str = "invalid grant_type";

	/// Stable labels of every failure kind, indexed by variant.
	pub const KINDS: [&'static str; 5] = [
		"malformed_request",
		"invalid_grant_type",
		"client_verification_failed",
		"user_verification_failed",
		"refresh_verifier_fault",
	];

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(&self) -> &'static str {
		Self::KINDS[self.kind_slot()]
	}

	pub(crate) const fn kind_slot(&self) -> usize {
		match self {
			GrantError::MalformedRequest => 0,
			GrantError::InvalidGrantType { .. } => 1,
			GrantError::ClientVerificationFailed(_) => 2,
			GrantError::UserVerificationFailed(_) => 3,
			GrantError::RefreshVerifierFault { .. } => 4,
		}
	}

	/// Converts the failure into the JSON body sent back to the caller.
	///
	/// Collaborator payloads pass through untouched; endpoint-originated failures use the
	/// `{"error": "<message>"}` shape.
	pub fn into_payload(self) -> ErrorPayload {
		match self {
			GrantError::MalformedRequest => ErrorPayload::message(Self::BAD_REQUEST_MESSAGE),
			GrantError::InvalidGrantType { .. } =>
				ErrorPayload::message(Self::INVALID_GRANT_TYPE_MESSAGE),
			GrantError::ClientVerificationFailed(payload)
			| GrantError::UserVerificationFailed(payload) => payload,
			GrantError::RefreshVerifierFault { message } => ErrorPayload::message(message),
		}
	}
}

/// Unexpected fault raised by a verifier instead of a structured verdict.
#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct VerifierFault {
	message: String,
	#[source]
	source: Option<BoxError>,
}
impl VerifierFault {
	/// Creates a fault carrying only a message.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into(), source: None }
	}

	/// Wraps an underlying error; its display string becomes the fault message.
	pub fn from_source(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self { message: src.to_string(), source: Some(Box::new(src)) }
	}

	/// Message echoed back to the caller.
	pub fn message(&self) -> &str {
		&self.message
	}
}
