//! Validated identifier types
//!
//! Tools are addressed by a URL slug (`word-counter`, `sha256-hash-generator`).
//! Slugs are parsed once into [`ToolSlug`] and carried as a newtype from then
//! on, so registry lookups and routes never see an unchecked string.
//!
//! # Examples
//!
//! ```rust
//! use toolbox_core::identifiers::ToolSlug;
//!
//! let slug = ToolSlug::parse("word-counter").unwrap();
//! assert_eq!(slug.as_str(), "word-counter");
//!
//! assert!(ToolSlug::parse("").is_err());
//! assert!(ToolSlug::parse("Word Counter").is_err());
//! assert!(ToolSlug::parse("../../etc").is_err());
//! ```

mod validation;

pub use validation::{MAX_SLUG_LENGTH, SlugValidationError, SlugValidator};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL-safe identifier of a tool
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolSlug(String);

impl ToolSlug {
    /// Parse and validate a slug
    pub fn parse(slug: impl AsRef<str>) -> Result<Self, SlugValidationError> {
        SlugValidator::validate(slug.as_ref()).map(|s| Self(s.to_string()))
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create a slug without validation (for static catalog tables and tests)
    #[doc(hidden)]
    pub fn new_unchecked(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }
}

impl fmt::Display for ToolSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToolSlug {
    type Err = SlugValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ToolSlug> for String {
    fn from(slug: ToolSlug) -> Self {
        slug.0
    }
}

impl TryFrom<String> for ToolSlug {
    type Error = SlugValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl AsRef<str> for ToolSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier attached to every HTTP request for log correlation
///
/// Generated as a UUID v4 unless the client supplies a valid `X-Request-ID`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh random request ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Accept a client-supplied request ID
    ///
    /// Valid IDs are 1..=128 characters of ASCII alphanumerics, `-` and `_`.
    /// Anything else (including `:` which log pipelines treat as a field
    /// separator) is rejected.
    pub fn parse(id: impl AsRef<str>) -> Option<Self> {
        let id = id.as_ref();
        let valid = !id.is_empty()
            && id.len() <= MAX_SLUG_LENGTH
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(id.to_string()))
    }

    /// Get the request ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
