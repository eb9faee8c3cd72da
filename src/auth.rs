//! Auth-domain identifiers, grant types, secrets, and verification verdicts.

pub mod client;
pub mod grant;
pub mod id;
pub mod payload;
pub mod secret;
pub mod token;

pub use client::*;
pub use grant::*;
pub use id::*;
pub use payload::*;
pub use secret::*;
pub use token::*;
