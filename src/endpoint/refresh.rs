//! Refresh token grant with fault containment.
//!
//! The refresh verifier is the one collaborator allowed to fail without a verdict. An
//! `Err(VerifierFault)` or a panic, whether raised while building its future or while polling
//! it, is caught here and flattened into `{"error": "<message>"}`. The boundary covers this
//! grant only.

// std
use std::{any::Any, panic::AssertUnwindSafe};
// crates.io
use futures_util::FutureExt;
// self
use crate::{
	_prelude::*,
	auth::{GrantType, IssuedToken, Secret},
	endpoint::TokenEndpoint,
	error::GrantError,
	obs::GrantSpan,
	request::{REFRESH_TOKEN_FIELD, TokenRequest},
};

const PANIC_FALLBACK_MESSAGE: &str = "refresh token verification failed";

impl TokenEndpoint {
	/// Verifies a refresh token, converting verifier faults into grant failures.
	pub(crate) async fn refresh_grant(
		&self,
		request: &TokenRequest,
	) -> Result<IssuedToken, GrantError> {
		let span = GrantSpan::new("refresh_grant");

		span.record_grant(GrantType::RefreshToken);

		span.instrument(async {
			let refresh_token = Secret::new(request.field(REFRESH_TOKEN_FIELD).unwrap_or_default());
			let token_config = self.token_request_config();
			let outcome = AssertUnwindSafe(async {
				self.user_verifier.verify_refresh_token(&refresh_token, &token_config).await
			})
			.catch_unwind()
			.await;

			match outcome {
				Ok(Ok(verification)) => verification.into_result(),
				Ok(Err(fault)) =>
					Err(GrantError::RefreshVerifierFault { message: fault.message().to_owned() }),
				Err(panic) =>
					Err(GrantError::RefreshVerifierFault { message: panic_message(panic.as_ref()) }),
			}
		})
		.await
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_owned()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		PANIC_FALLBACK_MESSAGE.to_owned()
	}
}
