//! Customer passcode type.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Errors that can occur when parsing a [`Passcode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PasscodeError {
    /// The input string is empty.
    #[error("passcode cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("passcode must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[A-Za-z0-9]`.
    #[error("passcode may only contain letters and digits")]
    InvalidCharacter,
}

/// A short credential identifying a customer for order lookup and
/// submission, in lieu of full account authentication.
///
/// ## Constraints
///
/// - Length: 1-32 characters
/// - ASCII letters and digits only
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Passcode(String);

impl Passcode {
    /// Maximum length of a passcode.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `Passcode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 32 characters,
    /// or contains a character other than an ASCII letter or digit.
    pub fn parse(s: &str) -> Result<Self, PasscodeError> {
        if s.is_empty() {
            return Err(PasscodeError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(PasscodeError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PasscodeError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the passcode as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Passcode {
    type Err = PasscodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Validation applies on receipt from the network too, so Deserialize goes
// through `parse` rather than adopting the raw string.
impl<'de> Deserialize<'de> for Passcode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Passcode::parse("1234").is_ok());
        assert!(Passcode::parse("abc123").is_ok());
        assert!(Passcode::parse("A").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Passcode::parse(""), Err(PasscodeError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "1".repeat(33);
        assert!(matches!(
            Passcode::parse(&long),
            Err(PasscodeError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert!(matches!(
            Passcode::parse("12 34"),
            Err(PasscodeError::InvalidCharacter)
        ));
        assert!(matches!(
            Passcode::parse("pass-code"),
            Err(PasscodeError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_serde_validates() {
        let ok: Passcode = serde_json::from_str("\"1234\"").unwrap();
        assert_eq!(ok.as_str(), "1234");

        assert!(serde_json::from_str::<Passcode>("\"\"").is_err());
        assert!(serde_json::from_str::<Passcode>("\"bad passcode\"").is_err());
    }
}
