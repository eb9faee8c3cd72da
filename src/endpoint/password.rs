//! Resource owner password credentials grant.

// self
use crate::{
	_prelude::*,
	auth::{ClientContext, GrantType, IssuedToken, Secret},
	endpoint::TokenEndpoint,
	error::GrantError,
	obs::GrantSpan,
	request::{PASSWORD_FIELD, TokenRequest, USERNAME_FIELD},
};

impl TokenEndpoint {
	/// Verifies `username`/`password` and returns the verifier's verdict unchanged.
	///
	/// The client-scoped verifier entry point is used only when client verification actually
	/// ran. Missing fields reach the verifier as empty strings.
	pub(crate) async fn password_grant(
		&self,
		client: Option<&ClientContext>,
		request: &TokenRequest,
	) -> Result<IssuedToken, GrantError> {
		let span = GrantSpan::new("password_grant");

		span.record_grant(GrantType::Password);

		span.instrument(async {
			let username = request.field(USERNAME_FIELD).unwrap_or_default();
			let password = Secret::new(request.field(PASSWORD_FIELD).unwrap_or_default());
			let token_config = self.token_request_config();
			let verification = match client {
				Some(client) =>
					self.user_verifier
						.verify_client_password(client, username, &password, &token_config)
						.await,
				None => self.user_verifier.verify_password(username, &password, &token_config).await,
			};

			verification.into_result()
		})
		.await
	}
}
