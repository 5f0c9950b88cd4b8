//! Product code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductCode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CodeError {
    /// The input string is empty (or whitespace only).
    #[error("product code cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product code must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A merchant-assigned product code (SKU-like identifier).
///
/// Codes are the external identity of a product; the store enforces that
/// no two products ever share one. This type only validates shape - the
/// uniqueness invariant lives in the store.
///
/// ## Constraints
///
/// - Non-empty after trimming surrounding whitespace
/// - At most 64 characters
///
/// ## Examples
///
/// ```
/// use verdura_core::ProductCode;
///
/// assert!(ProductCode::parse("abc123").is_ok());
/// assert!(ProductCode::parse("").is_err());
/// assert!(ProductCode::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Maximum length of a product code.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ProductCode` from a string.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than 64
    /// characters.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(CodeError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductCode` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
