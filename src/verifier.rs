//! Collaborator contracts consulted by the grant state machine.
//!
//! The endpoint never looks collaborators up at runtime; both verifiers are injected as
//! `Arc<dyn ...>` when the [`TokenEndpoint`](crate::endpoint::TokenEndpoint) is built.

pub mod memory;

pub use memory::MemoryClientVerifier;

// self
use crate::{
	_prelude::*,
	auth::{ClientContext, ClientVerification, Secret, UserVerification},
	config::TokenRequestConfig,
	error::VerifierFault,
	request::TokenRequest,
};

/// Boxed future returned by verifier implementations.
pub type VerifierFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Authenticates the calling client application.
pub trait ClientVerifier
where
	Self: Send + Sync,
{
	/// Inspects the raw request and decides whether the client is trusted.
	fn verify<'a>(&'a self, request: &'a TokenRequest) -> VerifierFuture<'a, ClientVerification>;
}

/// Verifies resource owner credentials and mints token pairs.
pub trait UserVerifier
where
	Self: Send + Sync,
{
	/// Verifies a username/password pair when no client verification took place.
	fn verify_password<'a>(
		&'a self,
		username: &'a str,
		password: &'a Secret,
		config: &'a TokenRequestConfig,
	) -> VerifierFuture<'a, UserVerification>;

	/// Verifies a username/password pair on behalf of a verified client.
	///
	/// Implementations typically scope the minted token to the verified client. The default
	/// ignores the client and defers to [`verify_password`](Self::verify_password).
	fn verify_client_password<'a>(
		&'a self,
		_client: &'a ClientContext,
		username: &'a str,
		password: &'a Secret,
		config: &'a TokenRequestConfig,
	) -> VerifierFuture<'a, UserVerification> {
		self.verify_password(username, password, config)
	}

	/// Verifies a refresh token and mints a replacement pair.
	///
	/// Returning [`VerifierFault`] (or panicking) reports an unexpected failure; the endpoint
	/// answers with `{"error": "<message>"}` instead of propagating it.
	fn verify_refresh_token<'a>(
		&'a self,
		refresh_token: &'a Secret,
		config: &'a TokenRequestConfig,
	) -> VerifierFuture<'a, Result<UserVerification, VerifierFault>>;
}
