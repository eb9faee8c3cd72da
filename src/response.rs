//! Terminal response renderers.

// self
use crate::{
	_prelude::*,
	auth::{ErrorPayload, IssuedToken},
};

/// Media type of every response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Fully rendered HTTP response handed back to the hosting layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenResponse {
	/// HTTP status code (`200` or `400`).
	pub status: u16,
	/// `Content-Type` header value.
	pub content_type: &'static str,
	/// Serialized JSON body.
	pub body: String,
}
impl TokenResponse {
	/// Status code of a successful issuance.
	pub const OK: u16 = 200;
	/// Status code of every failure.
	pub const BAD_REQUEST: u16 = 400;

	/// Renders `400 Bad Request` with the payload serialized verbatim.
	pub fn bad_request(payload: &ErrorPayload) -> Self {
		Self {
			status: Self::BAD_REQUEST,
			content_type: JSON_CONTENT_TYPE,
			body: payload.to_string(),
		}
	}

	/// Renders `200 OK` with the issued token serialized verbatim.
	///
	/// A token that cannot be serialized is reported as a bad request carrying the
	/// serializer's message.
	pub fn success(token: &IssuedToken) -> Self {
		match serde_json::to_string(token) {
			Ok(body) => Self { status: Self::OK, content_type: JSON_CONTENT_TYPE, body },
			Err(e) => Self::bad_request(&ErrorPayload::message(e.to_string())),
		}
	}

	/// Returns true for `200 OK`.
	pub fn is_success(&self) -> bool {
		self.status == Self::OK
	}

	/// Parses the body back into JSON.
	pub fn json(&self) -> Result<JsonValue, serde_json::Error> {
		serde_json::from_str(&self.body)
	}
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for TokenResponse {
	fn into_response(self) -> axum::response::Response {
		use axum::http::{HeaderValue, StatusCode, header::CONTENT_TYPE};

		let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST);

		(status, [(CONTENT_TYPE, HeaderValue::from_static(self.content_type))], self.body)
			.into_response()
	}
}
