//! Structured error bodies returned with `400 Bad Request`.

// self
use crate::_prelude::*;

/// JSON error body, either endpoint-generated or supplied verbatim by a verifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPayload(JsonValue);
impl ErrorPayload {
	/// Builds the `{"error": "<message>"}` shape.
	pub fn message(message: impl Into<String>) -> Self {
		let mut body = JsonMap::new();

		body.insert("error".into(), JsonValue::String(message.into()));

		Self(JsonValue::Object(body))
	}

	/// Builds the `{"error": ..., "error_description": ...}` shape used by RFC 6749 §5.2.
	pub fn described(error: impl Into<String>, description: impl Into<String>) -> Self {
		let mut body = JsonMap::new();

		body.insert("error".into(), JsonValue::String(error.into()));
		body.insert("error_description".into(), JsonValue::String(description.into()));

		Self(JsonValue::Object(body))
	}

	/// Serializes any collaborator-defined error type into a payload.
	pub fn from_serialize<T>(value: &T) -> Result<Self, serde_json::Error>
	where
		T: ?Sized + Serialize,
	{
		serde_json::to_value(value).map(Self)
	}

	/// Returns the `error` member when the payload is an object carrying a string code.
	pub fn error_code(&self) -> Option<&str> {
		self.0.get("error").and_then(JsonValue::as_str)
	}

	/// Borrows the raw JSON value.
	pub fn as_json(&self) -> &JsonValue {
		&self.0
	}

	/// Returns the raw JSON value.
	pub fn into_json(self) -> JsonValue {
		self.0
	}
}
impl From<JsonValue> for ErrorPayload {
	fn from(value: JsonValue) -> Self {
		Self(value)
	}
}
impl Display for ErrorPayload {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}
