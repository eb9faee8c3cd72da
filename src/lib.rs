//! OAuth 2.0 token endpoint for the `password` and `refresh_token` grants—pluggable client and
//! user verifiers, verbatim error payloads, and transport-agnostic response rendering.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod obs;
pub mod request;
pub mod response;
#[cfg(feature = "axum")] pub mod server;
pub mod verifier;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "axum")] pub use axum;
#[cfg(test)] use tower as _;
