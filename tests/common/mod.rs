#![allow(dead_code)]

// std
use std::{
	collections::HashMap,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};
// crates.io
use parking_lot::Mutex;
use time::Duration;
// self
use oauth2_token_endpoint::{
	auth::{
		ClientContext, ClientId, ClientVerification, ErrorPayload, IssuedToken, Secret,
		UserVerification,
	},
	config::{TokenEndpointConfig, TokenRequestConfig},
	endpoint::TokenEndpoint,
	error::VerifierFault,
	request::{FormFields, TokenRequest},
	verifier::{ClientVerifier, UserVerifier, VerifierFuture},
};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client verifier returning a fixed verdict and counting invocations.
pub struct ScriptedClientVerifier {
	verdict: ClientVerification,
	calls: AtomicUsize,
}
impl ScriptedClientVerifier {
	pub fn accepting(client_id: &str) -> Arc<Self> {
		let client_id = ClientId::new(client_id).expect("Client fixture should be valid.");

		Arc::new(Self {
			verdict: ClientVerification::Verified(ClientContext::new(client_id)),
			calls: AtomicUsize::new(0),
		})
	}

	pub fn rejecting(payload: serde_json::Value) -> Arc<Self> {
		Arc::new(Self {
			verdict: ClientVerification::Rejected(ErrorPayload::from(payload)),
			calls: AtomicUsize::new(0),
		})
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl ClientVerifier for ScriptedClientVerifier {
	fn verify<'a>(&'a self, _: &'a TokenRequest) -> VerifierFuture<'a, ClientVerification> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let verdict = self.verdict.clone();

		Box::pin(async move { verdict })
	}
}

/// Scripted behavior of the refresh token path.
#[derive(Clone)]
pub enum RefreshScript {
	Issue(IssuedToken),
	Reject(serde_json::Value),
	Fault(&'static str),
	Panic(&'static str),
	/// Panics before any future is returned.
	PanicOnCall(&'static str),
}

/// User verifier backed by a username/password table and a refresh script.
pub struct ScriptedUserVerifier {
	accounts: HashMap<String, String>,
	token: IssuedToken,
	refresh: RefreshScript,
	password_calls: AtomicUsize,
	client_password_calls: AtomicUsize,
	refresh_calls: AtomicUsize,
	last_client: Mutex<Option<String>>,
	last_config: Mutex<Option<TokenRequestConfig>>,
}
impl ScriptedUserVerifier {
	pub fn new(token: IssuedToken, refresh: RefreshScript) -> Self {
		Self {
			accounts: HashMap::new(),
			token,
			refresh,
			password_calls: AtomicUsize::new(0),
			client_password_calls: AtomicUsize::new(0),
			refresh_calls: AtomicUsize::new(0),
			last_client: Mutex::new(None),
			last_config: Mutex::new(None),
		}
	}

	pub fn with_account(mut self, username: &str, password: &str) -> Self {
		self.accounts.insert(username.to_owned(), password.to_owned());

		self
	}

	pub fn password_calls(&self) -> usize {
		self.password_calls.load(Ordering::SeqCst)
	}

	pub fn client_password_calls(&self) -> usize {
		self.client_password_calls.load(Ordering::SeqCst)
	}

	pub fn refresh_calls(&self) -> usize {
		self.refresh_calls.load(Ordering::SeqCst)
	}

	pub fn total_calls(&self) -> usize {
		self.password_calls() + self.client_password_calls() + self.refresh_calls()
	}

	pub fn last_client(&self) -> Option<String> {
		self.last_client.lock().clone()
	}

	pub fn last_config(&self) -> Option<TokenRequestConfig> {
		self.last_config.lock().clone()
	}

	fn check(&self, username: &str, password: &Secret) -> UserVerification {
		match self.accounts.get(username) {
			Some(expected) if expected == password.expose() =>
				UserVerification::Issued(self.token.clone()),
			_ => UserVerification::Rejected(ErrorPayload::message("invalid_credentials")),
		}
	}
}
impl UserVerifier for ScriptedUserVerifier {
	fn verify_password<'a>(
		&'a self,
		username: &'a str,
		password: &'a Secret,
		config: &'a TokenRequestConfig,
	) -> VerifierFuture<'a, UserVerification> {
		self.password_calls.fetch_add(1, Ordering::SeqCst);
		*self.last_config.lock() = Some(config.clone());

		Box::pin(async move { self.check(username, password) })
	}

	fn verify_client_password<'a>(
		&'a self,
		client: &'a ClientContext,
		username: &'a str,
		password: &'a Secret,
		config: &'a TokenRequestConfig,
	) -> VerifierFuture<'a, UserVerification> {
		self.client_password_calls.fetch_add(1, Ordering::SeqCst);
		*self.last_client.lock() = Some(client.client_id.to_string());
		*self.last_config.lock() = Some(config.clone());

		Box::pin(async move { self.check(username, password) })
	}

	fn verify_refresh_token<'a>(
		&'a self,
		_: &'a Secret,
		config: &'a TokenRequestConfig,
	) -> VerifierFuture<'a, Result<UserVerification, VerifierFault>> {
		self.refresh_calls.fetch_add(1, Ordering::SeqCst);
		*self.last_config.lock() = Some(config.clone());

		let script = self.refresh.clone();

		if let RefreshScript::PanicOnCall(message) = &script {
			panic!("{message}");
		}

		Box::pin(async move {
			match script {
				RefreshScript::Issue(token) => Ok(UserVerification::Issued(token)),
				RefreshScript::Reject(payload) =>
					Ok(UserVerification::Rejected(ErrorPayload::from(payload))),
				RefreshScript::Fault(message) => Err(VerifierFault::new(message)),
				RefreshScript::Panic(message) | RefreshScript::PanicOnCall(message) =>
					panic!("{message}"),
			}
		})
	}
}

pub fn token(access: &str, refresh: &str) -> IssuedToken {
	IssuedToken::new(access, refresh, Duration::hours(1))
}

pub fn config(require_client_verification: bool) -> TokenEndpointConfig {
	TokenEndpointConfig::builder("https://auth.example.com", "api://default", "signing-key")
		.require_client_verification(require_client_verification)
		.build()
		.expect("Configuration fixture should build.")
}

pub fn endpoint(
	require_client_verification: bool,
	clients: Option<Arc<ScriptedClientVerifier>>,
	users: Arc<ScriptedUserVerifier>,
) -> TokenEndpoint {
	let mut builder = TokenEndpoint::builder(config(require_client_verification), users);

	if let Some(clients) = clients {
		builder = builder.client_verifier(clients);
	}

	builder.build().expect("Endpoint fixture should build.")
}

pub fn form_post(fields: &[(&str, &str)]) -> TokenRequest {
	TokenRequest::new(
		"POST",
		Some(FORM_CONTENT_TYPE),
		fields.iter().copied().collect::<FormFields>(),
	)
}
