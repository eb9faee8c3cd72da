//! Grant types accepted by the token endpoint.

// self
use crate::{_prelude::*, error::GrantError};

/// OAuth 2.0 grant types supported by the endpoint.
///
/// The set is closed: resolving any other wire value fails with
/// [`GrantError::InvalidGrantType`] rather than falling back to a default grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Resource owner password credentials grant.
	Password,
	/// Refresh token grant.
	RefreshToken,
}
impl GrantType {
	/// Every supported grant type.
	pub const ALL: [GrantType; 2] = [GrantType::Password, GrantType::RefreshToken];

	/// Returns the RFC 6749 identifier for the grant type.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::Password => "password",
			GrantType::RefreshToken => "refresh_token",
		}
	}

	/// Returns true when the grant skips client verification.
	///
	/// A refresh token already carries the trust established when it was first issued.
	pub const fn skips_client_verification(self) -> bool {
		matches!(self, GrantType::RefreshToken)
	}

	/// Resolves the `grant_type` form field; a missing field is an error.
	pub fn resolve(value: Option<&str>) -> Result<Self, GrantError> {
		match value {
			Some(value) => value.parse(),
			None => Err(GrantError::InvalidGrantType { value: None }),
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for GrantType {
	type Err = GrantError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let view = s.trim();

		Self::ALL
			.into_iter()
			.find(|grant| grant.as_str().eq_ignore_ascii_case(view))
			.ok_or_else(|| GrantError::InvalidGrantType { value: Some(s.to_owned()) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parsing_is_case_insensitive() {
		assert_eq!("password".parse::<GrantType>(), Ok(GrantType::Password));
		assert_eq!("Password".parse::<GrantType>(), Ok(GrantType::Password));
		assert_eq!("REFRESH_TOKEN".parse::<GrantType>(), Ok(GrantType::RefreshToken));
		assert_eq!(" refresh_token ".parse::<GrantType>(), Ok(GrantType::RefreshToken));
	}

	#[test]
	fn unknown_values_never_fall_back() {
		for value in [
			"",
			"0",
			"1",
			"client_credentials",
			"authorization_code",
			"pass word",
			"password,password",
		] {
			assert_eq!(
				value.parse::<GrantType>(),
				Err(GrantError::InvalidGrantType { value: Some(value.to_owned()) }),
				"{value:?} must not resolve to a grant."
			);
		}

		assert_eq!(GrantType::resolve(None), Err(GrantError::InvalidGrantType { value: None }));
	}

	#[test]
	fn only_refresh_skips_client_verification() {
		assert!(!GrantType::Password.skips_client_verification());
		assert!(GrantType::RefreshToken.skips_client_verification());
	}
}
