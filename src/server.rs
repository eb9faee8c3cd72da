//! [`axum`] adapter mounting the endpoint at the configured token path.

// crates.io
use axum::{
	Router,
	body::Bytes,
	extract::{FromRequest, Multipart, Request, State},
	http::{
		HeaderMap,
		header::{AUTHORIZATION, CONTENT_TYPE, HeaderName},
	},
	routing::any,
};
// self
use crate::{
	endpoint::TokenEndpoint,
	request::{self, FormFields, TokenRequest},
	response::TokenResponse,
};

/// Builds a router serving `endpoint` at `config.token_path`.
///
/// Every method is routed to the endpoint so non-`POST` requests receive the endpoint's own
/// `400 Bad Request` rather than `405 Method Not Allowed`. Url-encoded and multipart bodies
/// are both decoded; file parts of a multipart body are skipped.
pub fn router(endpoint: TokenEndpoint) -> Router {
	let path = endpoint.config().token_path.clone();

	Router::new().route(&path, any(handle_token)).with_state(endpoint)
}

async fn handle_token(State(endpoint): State<TokenEndpoint>, req: Request) -> TokenResponse {
	let method = req.method().as_str().to_owned();
	let content_type = header_value(req.headers(), CONTENT_TYPE);
	let authorization = header_value(req.headers(), AUTHORIZATION);
	let multipart = content_type.as_deref().is_some_and(request::is_multipart);
	let mut token_request = if multipart {
		TokenRequest::new(method, content_type, multipart_fields(req).await)
	} else {
		// An unreadable body decodes to no fields; grant resolution rejects it.
		let body = Bytes::from_request(req, &()).await.unwrap_or_default();

		TokenRequest::from_urlencoded(method, content_type, &body)
	};

	if let Some(authorization) = authorization {
		token_request = token_request.with_authorization(authorization);
	}

	endpoint.handle(&token_request).await
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
	headers.get(name).and_then(|value| value.to_str().ok()).map(ToOwned::to_owned)
}

async fn multipart_fields(req: Request) -> FormFields {
	let Ok(mut multipart) = Multipart::from_request(req, &()).await else {
		return FormFields::default();
	};
	let mut fields = Vec::new();

	while let Ok(Some(field)) = multipart.next_field().await {
		if field.file_name().is_some() {
			continue;
		}

		let Some(name) = field.name().map(ToOwned::to_owned) else {
			continue;
		};

		match field.text().await {
			Ok(value) => fields.push((name, value)),
			Err(_) => break,
		}
	}

	fields.into_iter().collect()
}
