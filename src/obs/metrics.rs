// self
use crate::{auth::GrantType, obs::GrantOutcome};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_grant_outcome(grant: Option<GrantType>, outcome: GrantOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_token_endpoint_request_total",
			"grant" => crate::obs::grant_label(grant),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (grant, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_grant_outcome_noop_without_recorder() {
		record_grant_outcome(Some(GrantType::Password), GrantOutcome::Rejected);
		record_grant_outcome(None, GrantOutcome::Attempt);
	}
}
