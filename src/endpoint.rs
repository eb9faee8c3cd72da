//! Grant-dispatch state machine.
//!
//! Every request walks the same stages: request validation, grant-type resolution, optional
//! client verification, credential (or refresh token) verification, and finally exactly one
//! terminal response. Any failing stage short-circuits into `400 Bad Request`; nothing is
//! retried and nothing escalates past the rendered response.

mod metrics;
mod password;
mod refresh;

pub use self::metrics::EndpointMetrics;

// self
use crate::{
	_prelude::*,
	auth::{ClientContext, ErrorPayload, GrantType, IssuedToken},
	config::{TokenEndpointConfig, TokenRequestConfig},
	error::{ConfigError, GrantError},
	obs::{self, GrantOutcome, GrantSpan},
	request::{GRANT_TYPE_FIELD, TokenRequest},
	response::TokenResponse,
	verifier::{ClientVerifier, UserVerifier},
};

/// Token endpoint serving the `password` and `refresh_token` grants.
///
/// The endpoint owns only immutable configuration, the injected verifiers, and atomic
/// counters, so a single instance (or cheap clones of it) can serve concurrent requests
/// without coordination.
#[derive(Clone)]
pub struct TokenEndpoint {
	config: Arc<TokenEndpointConfig>,
	client_verifier: Option<Arc<dyn ClientVerifier>>,
	user_verifier: Arc<dyn UserVerifier>,
	metrics: Arc<EndpointMetrics>,
}
impl TokenEndpoint {
	/// Returns a builder for the provided configuration and user verifier.
	pub fn builder(
		config: impl Into<Arc<TokenEndpointConfig>>,
		user_verifier: Arc<dyn UserVerifier>,
	) -> TokenEndpointBuilder {
		TokenEndpointBuilder { config: config.into(), client_verifier: None, user_verifier }
	}

	/// Shared configuration.
	pub fn config(&self) -> &TokenEndpointConfig {
		&self.config
	}

	/// In-process request counters.
	pub fn metrics(&self) -> &EndpointMetrics {
		&self.metrics
	}

	/// Runs the grant state machine and renders exactly one response.
	pub async fn handle(&self, request: &TokenRequest) -> TokenResponse {
		let span = GrantSpan::new("handle");

		span.instrument(async {
			obs::record_grant_outcome(None, GrantOutcome::Attempt);
			self.metrics.record_attempt();

			match self.run(request, &span).await {
				Ok((grant, token)) => {
					obs::record_grant_outcome(Some(grant), GrantOutcome::Issued);
					self.metrics.record_issued(grant);

					TokenResponse::success(&token)
				},
				Err((grant, err)) => {
					obs::record_grant_outcome(grant, GrantOutcome::Rejected);
					obs::log_rejection(grant, &err);
					self.metrics.record_rejected(&err);

					TokenResponse::bad_request(&err.into_payload())
				},
			}
		})
		.await
	}

	async fn run(
		&self,
		request: &TokenRequest,
		span: &GrantSpan,
	) -> Result<(GrantType, IssuedToken), (Option<GrantType>, GrantError)> {
		request.ensure_form_post().map_err(|err| (None, err))?;

		let grant =
			GrantType::resolve(request.field(GRANT_TYPE_FIELD)).map_err(|err| (None, err))?;

		span.record_grant(grant);

		self.dispatch(grant, request)
			.await
			.map(|token| (grant, token))
			.map_err(|err| (Some(grant), err))
	}

	async fn dispatch(
		&self,
		grant: GrantType,
		request: &TokenRequest,
	) -> Result<IssuedToken, GrantError> {
		let client = self.verify_client(grant, request).await?;

		match grant {
			GrantType::Password => self.password_grant(client.as_ref(), request).await,
			GrantType::RefreshToken => self.refresh_grant(request).await,
		}
	}

	async fn verify_client(
		&self,
		grant: GrantType,
		request: &TokenRequest,
	) -> Result<Option<ClientContext>, GrantError> {
		if !self.config.require_client_verification || grant.skips_client_verification() {
			return Ok(None);
		}

		// The builder refuses this combination; fail closed regardless.
		let Some(verifier) = self.client_verifier.as_ref() else {
			return Err(GrantError::ClientVerificationFailed(ErrorPayload::message(
				"client verification is unavailable",
			)));
		};

		verifier.verify(request).await.into_result().map(Some)
	}

	fn token_request_config(&self) -> TokenRequestConfig {
		self.config.token_request(OffsetDateTime::now_utc())
	}
}
impl Debug for TokenEndpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenEndpoint")
			.field("config", &self.config)
			.field("client_verifier_set", &self.client_verifier.is_some())
			.field("metrics", &self.metrics)
			.finish()
	}
}

/// Builder for [`TokenEndpoint`] values.
pub struct TokenEndpointBuilder {
	config: Arc<TokenEndpointConfig>,
	client_verifier: Option<Arc<dyn ClientVerifier>>,
	user_verifier: Arc<dyn UserVerifier>,
}
impl TokenEndpointBuilder {
	/// Attaches the client verifier consulted when client verification is required.
	pub fn client_verifier(mut self, verifier: Arc<dyn ClientVerifier>) -> Self {
		self.client_verifier = Some(verifier);

		self
	}

	/// Validates the collaborator wiring and produces the endpoint.
	pub fn build(self) -> Result<TokenEndpoint> {
		if self.config.require_client_verification && self.client_verifier.is_none() {
			return Err(ConfigError::MissingClientVerifier.into());
		}

		Ok(TokenEndpoint {
			config: self.config,
			client_verifier: self.client_verifier,
			user_verifier: self.user_verifier,
			metrics: Default::default(),
		})
	}
}
impl Debug for TokenEndpointBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenEndpointBuilder")
			.field("config", &self.config)
			.field("client_verifier_set", &self.client_verifier.is_some())
			.finish()
	}
}
