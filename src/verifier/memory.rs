//! In-memory [`ClientVerifier`] keyed by client identifier.

// crates.io
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	auth::{ClientContext, ClientId, ClientVerification, ErrorPayload},
	request::TokenRequest,
	verifier::{ClientVerifier, VerifierFuture},
};

const INVALID_CLIENT: &str = "invalid_client";

#[derive(Clone)]
struct RegisteredClient {
	secret_digest: [u8; 32],
	name: Option<String>,
}

/// Client registry that keeps SHA-256 digests of client secrets in memory.
///
/// Credentials are read from `Authorization: Basic` first and the `client_id` /
/// `client_secret` form fields second.
#[derive(Default)]
pub struct MemoryClientVerifier {
	clients: RwLock<HashMap<ClientId, RegisteredClient>>,
}
impl MemoryClientVerifier {
	/// Registers (or replaces) a client and its secret.
	pub fn register(&self, client_id: ClientId, secret: &str, name: Option<String>) {
		self.clients
			.write()
			.insert(client_id, RegisteredClient { secret_digest: digest(secret), name });
	}

	/// Removes a client; returns true if it was registered.
	pub fn remove(&self, client_id: &str) -> bool {
		self.clients.write().remove(client_id).is_some()
	}

	/// Number of registered clients.
	pub fn len(&self) -> usize {
		self.clients.read().len()
	}

	/// Returns true when no clients are registered.
	pub fn is_empty(&self) -> bool {
		self.clients.read().is_empty()
	}

	fn check(&self, request: &TokenRequest) -> ClientVerification {
		let Some(credentials) = request.client_credentials() else {
			return reject("Client credentials are missing.");
		};
		let Some(secret) = credentials.client_secret else {
			return reject("Client secret is missing.");
		};
		let Ok(client_id) = ClientId::new(&credentials.client_id) else {
			return reject("Client identifier is malformed.");
		};
		let clients = self.clients.read();
		let Some(client) = clients.get(&client_id) else {
			return reject("Client is not registered.");
		};

		if client.secret_digest != digest(secret.expose()) {
			return reject("Client secret does not match.");
		}

		let mut context = ClientContext::new(client_id);

		context.name = client.name.clone();

		ClientVerification::Verified(context)
	}
}
impl ClientVerifier for MemoryClientVerifier {
	fn verify<'a>(&'a self, request: &'a TokenRequest) -> VerifierFuture<'a, ClientVerification> {
		Box::pin(async move { self.check(request) })
	}
}
impl Debug for MemoryClientVerifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MemoryClientVerifier").field("clients", &self.len()).finish()
	}
}

fn digest(secret: &str) -> [u8; 32] {
	Sha256::digest(secret.as_bytes()).into()
}

fn reject(description: &str) -> ClientVerification {
	ClientVerification::Rejected(ErrorPayload::described(INVALID_CLIENT, description))
}
