// self
use crate::{_prelude::*, auth::GrantType, error::GrantError};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedGrant<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedGrant<F> = F;

/// A span builder used by the grant state machine.
#[derive(Clone, Debug)]
pub struct GrantSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl GrantSpan {
	/// Creates a new span tagged with the provided stage; the grant is recorded once resolved.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth2_token_endpoint.grant",
				stage,
				grant = tracing::field::Empty
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Records the resolved grant type on the span.
	pub fn record_grant(&self, grant: GrantType) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("grant", grant.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = grant;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedGrant<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event describing why a request was rejected.
pub fn log_rejection(grant: Option<GrantType>, err: &GrantError) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			grant = crate::obs::grant_label(grant),
			reason = err.as_str(),
			"token request rejected: {err}"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (grant, err);
	}
}
