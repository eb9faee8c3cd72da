//! Optional observability helpers for the grant state machine.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_token_endpoint.grant` with the `stage`
//!   (call site) and `grant` fields, plus a debug event for every rejected request.
//! - Enable `metrics` to increment the `oauth2_token_endpoint_request_total` counter for every
//!   attempt/issuance/rejection, labeled by `grant` + `outcome`.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::{_prelude::*, auth::GrantType};

/// Label used before the grant type has been resolved.
pub const UNRESOLVED_GRANT: &str = "unresolved";

/// Outcome labels recorded for each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrantOutcome {
	/// Entry to the endpoint.
	Attempt,
	/// A token pair was issued.
	Issued,
	/// The request ended with `400 Bad Request`.
	Rejected,
}
impl GrantOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantOutcome::Attempt => "attempt",
			GrantOutcome::Issued => "issued",
			GrantOutcome::Rejected => "rejected",
		}
	}
}
impl Display for GrantOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Returns the label for a possibly unresolved grant.
pub const fn grant_label(grant: Option<GrantType>) -> &'static str {
	match grant {
		Some(grant) => grant.as_str(),
		None => UNRESOLVED_GRANT,
	}
}
