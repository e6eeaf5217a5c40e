//! Slug validation rules and utilities

use thiserror::Error;

/// Maximum length for slugs and request identifiers
pub const MAX_SLUG_LENGTH: usize = 128;

/// Error type for slug validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugValidationError {
    /// The slug string is empty
    #[error("Slug cannot be empty")]
    Empty,
    /// The slug has leading or trailing whitespace
    #[error("Slug cannot have leading or trailing whitespace")]
    LeadingTrailingWhitespace,
    /// The slug contains characters outside `[a-z0-9-]`
    #[error("Slug can only contain lowercase ASCII letters, digits, and hyphens")]
    InvalidCharacters,
    /// The slug starts or ends with a hyphen, or contains `--`
    #[error("Slug hyphens must separate non-empty words")]
    MisplacedHyphen,
    /// The slug exceeds the maximum length
    #[error("Slug too long ({length} chars, max {max})")]
    TooLong { length: usize, max: usize },
}

/// Validator for URL slugs
pub struct SlugValidator;

impl SlugValidator {
    /// Validate a slug string
    ///
    /// # Validation Rules
    ///
    /// - Non-empty, at most 128 characters
    /// - No leading or trailing whitespace
    /// - Only lowercase ASCII letters, digits and hyphens (`-`)
    /// - Hyphens separate words: no leading, trailing or doubled hyphen
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox_core::identifiers::SlugValidator;
    ///
    /// assert!(SlugValidator::validate("word-counter").is_ok());
    /// assert!(SlugValidator::validate("sha256-hash-generator").is_ok());
    ///
    /// assert!(SlugValidator::validate("").is_err());
    /// assert!(SlugValidator::validate("Word-Counter").is_err());
    /// assert!(SlugValidator::validate("../etc").is_err());
    /// assert!(SlugValidator::validate("-leading").is_err());
    /// ```
    pub fn validate(slug: &str) -> Result<&str, SlugValidationError> {
        if slug.is_empty() {
            return Err(SlugValidationError::Empty);
        }

        if slug != slug.trim() {
            return Err(SlugValidationError::LeadingTrailingWhitespace);
        }

        if slug.len() > MAX_SLUG_LENGTH {
            return Err(SlugValidationError::TooLong {
                length: slug.len(),
                max: MAX_SLUG_LENGTH,
            });
        }

        if !slug.chars().all(Self::is_valid_char) {
            return Err(SlugValidationError::InvalidCharacters);
        }

        if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
            return Err(SlugValidationError::MisplacedHyphen);
        }

        Ok(slug)
    }

    /// Check if a character is valid in a slug
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
    }

    /// Turn free text into a slug
    ///
    /// Lowercases, maps every run of invalid characters to a single hyphen
    /// and truncates to the maximum length.
    ///
    /// ```rust
    /// use toolbox_core::identifiers::SlugValidator;
    ///
    /// assert_eq!(SlugValidator::sanitize("Word Counter!"), "word-counter");
    /// assert_eq!(SlugValidator::sanitize("  RGB to HEX  "), "rgb-to-hex");
    /// assert_eq!(SlugValidator::sanitize("???"), "unnamed");
    /// ```
    pub fn sanitize(input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        for c in input.trim().chars().flat_map(char::to_lowercase) {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                slug.push(c);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }

        let mut slug = slug.trim_end_matches('-').to_string();
        if slug.is_empty() {
            return "unnamed".to_string();
        }

        if slug.len() > MAX_SLUG_LENGTH {
            slug.truncate(MAX_SLUG_LENGTH);
            slug = slug.trim_end_matches('-').to_string();
        }
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_slugs() {
        assert!(SlugValidator::validate("word-counter").is_ok());
        assert!(SlugValidator::validate("a").is_ok());
        assert!(SlugValidator::validate("base64-encoder").is_ok());
        assert!(SlugValidator::validate("md5-hash-generator").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(SlugValidator::validate(""), Err(SlugValidationError::Empty));
    }

    #[test]
    fn test_validate_whitespace() {
        assert_eq!(
            SlugValidator::validate(" word-counter"),
            Err(SlugValidationError::LeadingTrailingWhitespace)
        );
        assert_eq!(
            SlugValidator::validate("word counter"),
            Err(SlugValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_validate_invalid_characters() {
        assert_eq!(
            SlugValidator::validate("Word-Counter"),
            Err(SlugValidationError::InvalidCharacters)
        );
        assert_eq!(
            SlugValidator::validate("../etc/passwd"),
            Err(SlugValidationError::InvalidCharacters)
        );
        assert_eq!(
            SlugValidator::validate("word_counter"),
            Err(SlugValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_validate_hyphen_placement() {
        for slug in ["-word", "word-", "word--counter"] {
            assert_eq!(
                SlugValidator::validate(slug),
                Err(SlugValidationError::MisplacedHyphen),
                "{slug}"
            );
        }
    }

    #[test]
    fn test_validate_too_long() {
        let long = "a".repeat(MAX_SLUG_LENGTH + 1);
        match SlugValidator::validate(&long) {
            Err(SlugValidationError::TooLong { length, max }) => {
                assert_eq!(length, MAX_SLUG_LENGTH + 1);
                assert_eq!(max, MAX_SLUG_LENGTH);
            }
            other => panic!("Expected TooLong error, got {:?}", other),
        }
        assert!(SlugValidator::validate(&"a".repeat(MAX_SLUG_LENGTH)).is_ok());
    }

    #[test]
    fn test_sanitize_produces_valid_slugs() {
        for input in ["Hello World", "JSON -> YAML", "  x  ", "épée", "a--b"] {
            let slug = SlugValidator::sanitize(input);
            assert!(SlugValidator::validate(&slug).is_ok(), "{input:?} -> {slug:?}");
        }
        assert_eq!(SlugValidator::sanitize("JSON -> YAML"), "json-yaml");
    }

    proptest::proptest! {
        #[test]
        fn sanitize_output_always_validates(input in ".{0,200}") {
            let slug = SlugValidator::sanitize(&input);
            proptest::prop_assert!(SlugValidator::validate(&slug).is_ok(), "{:?}", slug);
        }
    }
}
