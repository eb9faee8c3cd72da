// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::{auth::GrantType, error::GrantError};

/// In-process request counters, broken down by issued grant and rejection kind.
///
/// Rejection kinds are the labels returned by [`GrantError::as_str`].
#[derive(Debug, Default)]
pub struct EndpointMetrics {
	attempts: AtomicU64,
	issued: [AtomicU64; GrantType::ALL.len()],
	rejected: [AtomicU64; GrantError::KINDS.len()],
}
impl EndpointMetrics {
	/// Returns the total number of handled requests.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of tokens issued for `grant`.
	pub fn issued(&self, grant: GrantType) -> u64 {
		self.issued[grant_slot(grant)].load(Ordering::Relaxed)
	}

	/// Returns the number of requests rejected with the given [`GrantError::as_str`] kind.
	///
	/// Unknown kinds report zero.
	pub fn rejected(&self, kind: &str) -> u64 {
		GrantError::KINDS
			.iter()
			.position(|known| *known == kind)
			.map_or(0, |slot| self.rejected[slot].load(Ordering::Relaxed))
	}

	/// Returns the number of requests that issued a token, across grants.
	pub fn successes(&self) -> u64 {
		self.issued.iter().map(|count| count.load(Ordering::Relaxed)).sum()
	}

	/// Returns the number of requests answered with `400 Bad Request`, across kinds.
	pub fn failures(&self) -> u64 {
		self.rejected.iter().map(|count| count.load(Ordering::Relaxed)).sum()
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_issued(&self, grant: GrantType) {
		self.issued[grant_slot(grant)].fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_rejected(&self, err: &GrantError) {
		self.rejected[err.kind_slot()].fetch_add(1, Ordering::Relaxed);
	}
}

fn grant_slot(grant: GrantType) -> usize {
	match grant {
		GrantType::Password => 0,
		GrantType::RefreshToken => 1,
	}
}
