//! Transport-agnostic description of an inbound token request.
//!
//! Hosting layers translate their native request type into [`TokenRequest`] (method,
//! `Content-Type`, optional `Authorization`, form fields decoded from either url-encoded or
//! multipart bodies) and hand it to
//! [`TokenEndpoint::handle`](crate::endpoint::TokenEndpoint::handle).

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::Secret, error::GrantError};

/// Form field carrying the requested grant type.
pub const GRANT_TYPE_FIELD: &str = "grant_type";
/// Form field carrying the resource owner's username.
pub const USERNAME_FIELD: &str = "username";
/// Form field carrying the resource owner's password.
pub const PASSWORD_FIELD: &str = "password";
/// Form field carrying the refresh token.
pub const REFRESH_TOKEN_FIELD: &str = "refresh_token";
/// Form field carrying the client identifier for `client_secret_post` authentication.
pub const CLIENT_ID_FIELD: &str = "client_id";
/// Form field carrying the client secret for `client_secret_post` authentication.
pub const CLIENT_SECRET_FIELD: &str = "client_secret";

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Ordered form fields decoded from the request body.
///
/// Repeated names are kept; [`FormFields::get`] treats them as ambiguous and reports the field
/// as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);
impl FormFields {
	/// Decodes an `application/x-www-form-urlencoded` body.
	pub fn parse(body: &[u8]) -> Self {
		Self(url::form_urlencoded::parse(body).into_owned().collect())
	}

	/// Returns the value of a field that appears exactly once.
	pub fn get(&self, name: &str) -> Option<&str> {
		let mut values = self.0.iter().filter(|(key, _)| key == name).map(|(_, value)| value);
		let first = values.next()?;

		match values.next() {
			Some(_) => None,
			None => Some(first.as_str()),
		}
	}

	/// Number of decoded pairs, repeated names included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no fields were decoded.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for FormFields
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
impl Debug for FormFields {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		// Values may hold passwords or tokens; only names are printed.
		f.debug_list().entries(self.0.iter().map(|(key, _)| key)).finish()
	}
}

/// Client credentials presented with the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCredentials {
	/// Raw client identifier.
	pub client_id: String,
	/// Client secret, if one was presented.
	pub client_secret: Option<Secret>,
}

/// Inbound token request as seen by the grant state machine.
#[derive(Clone, Debug)]
pub struct TokenRequest {
	/// HTTP method, compared case-sensitively.
	pub method: String,
	/// Raw `Content-Type` header value.
	pub content_type: Option<String>,
	/// Raw `Authorization` header value; redacted in debug output.
	pub authorization: Option<Secret>,
	/// Decoded form fields.
	pub form: FormFields,
}
impl TokenRequest {
	/// Creates a request from already-decoded form fields.
	pub fn new(
		method: impl Into<String>,
		content_type: Option<impl Into<String>>,
		form: FormFields,
	) -> Self {
		Self {
			method: method.into(),
			content_type: content_type.map(Into::into),
			authorization: None,
			form,
		}
	}

	/// Creates a request from a raw body, decoding it only when the content type is
	/// `application/x-www-form-urlencoded`.
	pub fn from_urlencoded(
		method: impl Into<String>,
		content_type: Option<impl Into<String>>,
		body: &[u8],
	) -> Self {
		let content_type = content_type.map(Into::into);
		let form = match content_type.as_deref().map(media_type) {
			Some(media) if media.eq_ignore_ascii_case(FORM_URLENCODED) => FormFields::parse(body),
			_ => FormFields::default(),
		};

		Self { method: method.into(), content_type, authorization: None, form }
	}

	/// Attaches the raw `Authorization` header value.
	pub fn with_authorization(mut self, value: impl Into<Secret>) -> Self {
		self.authorization = Some(value.into());

		self
	}

	/// Returns a form field that appears exactly once.
	pub fn field(&self, name: &str) -> Option<&str> {
		self.form.get(name)
	}

	/// Returns true when the content type carries form data (url-encoded or multipart).
	pub fn has_form_content_type(&self) -> bool {
		self.content_type.as_deref().map(media_type).is_some_and(|media| {
			media.eq_ignore_ascii_case(FORM_URLENCODED) || is_multipart(media)
		})
	}

	/// Ensures the request is a `POST` carrying form data.
	pub fn ensure_form_post(&self) -> Result<(), GrantError> {
		if self.method == "POST" && self.has_form_content_type() {
			Ok(())
		} else {
			Err(GrantError::MalformedRequest)
		}
	}

	/// Extracts client credentials from `Authorization: Basic` or, failing that, from the
	/// `client_id`/`client_secret` form fields.
	pub fn client_credentials(&self) -> Option<ClientCredentials> {
		if let Some(credentials) = self.authorization.as_ref().and_then(|v| parse_basic(v.expose()))
		{
			return Some(credentials);
		}

		let client_id = self.field(CLIENT_ID_FIELD)?;

		Some(ClientCredentials {
			client_id: client_id.to_owned(),
			client_secret: self.field(CLIENT_SECRET_FIELD).map(Secret::from),
		})
	}
}

/// Returns true when `content_type` names a `multipart/form-data` body.
pub fn is_multipart(content_type: &str) -> bool {
	media_type(content_type).eq_ignore_ascii_case(MULTIPART_FORM_DATA)
}

fn media_type(content_type: &str) -> &str {
	content_type.split(';').next().unwrap_or_default().trim()
}

fn parse_basic(header: &str) -> Option<ClientCredentials> {
	let (scheme, encoded) = header.trim().split_once(' ')?;

	if !scheme.eq_ignore_ascii_case("basic") {
		return None;
	}

	let decoded = STANDARD.decode(encoded.trim()).ok()?;
	let decoded = String::from_utf8(decoded).ok()?;
	let (client_id, client_secret) = decoded.split_once(':')?;

	Some(ClientCredentials {
		client_id: client_id.to_owned(),
		client_secret: Some(Secret::new(client_secret)),
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn form_post(body: &str) -> TokenRequest {
		TokenRequest::from_urlencoded("POST", Some(FORM_URLENCODED), body.as_bytes())
	}

	#[test]
	fn urlencoded_bodies_are_decoded() {
		let request = form_post("grant_type=password&username=alice%40example.com&password=a+b");

		assert_eq!(request.field(GRANT_TYPE_FIELD), Some("password"));
		assert_eq!(request.field(USERNAME_FIELD), Some("alice@example.com"));
		assert_eq!(request.field(PASSWORD_FIELD), Some("a b"));
		assert_eq!(request.field(REFRESH_TOKEN_FIELD), None);
	}

	#[test]
	fn repeated_fields_are_ambiguous() {
		let request = form_post("grant_type=password&grant_type=refresh_token&username=bob");

		assert_eq!(request.field(GRANT_TYPE_FIELD), None);
		assert_eq!(request.field(USERNAME_FIELD), Some("bob"));
		assert_eq!(request.form.len(), 3);
	}

	#[test]
	fn content_type_parameters_and_case_are_tolerated() {
		let request = TokenRequest::from_urlencoded(
			"POST",
			Some("Application/X-WWW-Form-Urlencoded; charset=UTF-8"),
			b"grant_type=password",
		);

		assert!(request.ensure_form_post().is_ok());
		assert_eq!(request.field(GRANT_TYPE_FIELD), Some("password"));

		let multipart = TokenRequest::new(
			"POST",
			Some("multipart/form-data; boundary=xyz"),
			FormFields::from_iter([(GRANT_TYPE_FIELD, "password")]),
		);

		assert!(multipart.ensure_form_post().is_ok());
		assert!(is_multipart("Multipart/Form-Data; boundary=xyz"));
		assert!(!is_multipart(FORM_URLENCODED));
	}

	#[test]
	fn non_form_posts_are_malformed() {
		let json =
			TokenRequest::from_urlencoded("POST", Some("application/json"), b"grant_type=password");

		assert_eq!(json.ensure_form_post(), Err(GrantError::MalformedRequest));
		assert!(json.form.is_empty(), "Non-form bodies must not be decoded.");

		let get = TokenRequest::from_urlencoded("GET", Some(FORM_URLENCODED), b"");

		assert_eq!(get.ensure_form_post(), Err(GrantError::MalformedRequest));

		let lowercase = TokenRequest::from_urlencoded("post", Some(FORM_URLENCODED), b"");

		assert_eq!(lowercase.ensure_form_post(), Err(GrantError::MalformedRequest));

		let missing = TokenRequest::from_urlencoded("POST", None::<String>, b"");

		assert_eq!(missing.ensure_form_post(), Err(GrantError::MalformedRequest));
	}

	#[test]
	fn basic_credentials_take_precedence() {
		let request = form_post("client_id=form-client&client_secret=form-secret")
			.with_authorization(format!("Basic {}", STANDARD.encode("basic-client:s3cr:et")));
		let credentials = request.client_credentials().expect("Basic credentials should parse.");

		assert_eq!(credentials.client_id, "basic-client");
		assert_eq!(credentials.client_secret.as_ref().map(Secret::expose), Some("s3cr:et"));
	}

	#[test]
	fn form_credentials_are_a_fallback() {
		let request = form_post("client_id=form-client&client_secret=form-secret")
			.with_authorization("Bearer abc");
		let credentials = request.client_credentials().expect("Form credentials should parse.");

		assert_eq!(credentials.client_id, "form-client");
		assert_eq!(credentials.client_secret.as_ref().map(Secret::expose), Some("form-secret"));
		assert_eq!(form_post("grant_type=password").client_credentials(), None);
	}

	#[test]
	fn debug_output_hides_field_values() {
		let rendered = format!("{:?}", form_post("username=alice&password=hunter2"));

		assert!(rendered.contains("password"));
		assert!(!rendered.contains("hunter2"));
	}
}
