//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Grammar rules a reqline string can violate.
///
/// This is a closed enumeration: each variant corresponds to exactly one rule
/// in the reqline grammar and carries exactly one fixed message. Validation
/// stops at the first violated rule, so callers only ever see one of these
/// per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ValidationErrorKind {
    /// The input was empty (or whitespace-only) after trimming.
    EmptyInput,
    /// The literal HTTP keyword never appeared.
    MissingHttpKeyword,
    /// The literal URL keyword never appeared.
    MissingUrlKeyword,
    /// Both HTTP and URL words are present but no pipe separates them.
    MissingPipeDelimiter,
    /// A pipe was not surrounded by exactly one space on each side,
    /// or a segment was empty.
    InvalidPipeSpacing,
    /// A segment had no space separating the keyword from its value.
    MissingSpaceAfterKeyword,
    /// A keyword was not written in uppercase.
    KeywordsMustBeUppercase,
    /// A run of two or more consecutive spaces inside a segment.
    MultipleSpaces,
    /// HTTP appeared somewhere other than the first segment.
    HttpMustBeFirst,
    /// HTTP appeared more than once.
    DuplicateHttpKeyword,
    /// URL appeared somewhere other than the second segment.
    UrlMustBeSecond,
    /// URL appeared more than once.
    DuplicateUrlKeyword,
    /// The method value was not written in uppercase.
    HttpMethodMustBeUppercase,
    /// The method value was not GET or POST.
    InvalidHttpMethod,
    /// The URL value did not carry an http/https scheme with content after it.
    InvalidUrlFormat,
    /// The HEADERS value did not parse as a JSON object.
    InvalidJsonInHeaders,
    /// The QUERY value did not parse as a JSON object.
    InvalidJsonInQuery,
    /// The BODY value did not parse as a JSON object.
    InvalidJsonInBody,
    /// A segment began with a keyword outside the reqline vocabulary.
    UnknownKeyword,
}

impl ValidationErrorKind {
    /// Returns the fixed message for this rule violation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyInput => "Reqline cannot be empty",
            ValidationErrorKind::MissingHttpKeyword => "Missing required HTTP keyword",
            ValidationErrorKind::MissingUrlKeyword => "Missing required URL keyword",
            ValidationErrorKind::MissingPipeDelimiter => "Missing pipe delimiter",
            ValidationErrorKind::InvalidPipeSpacing => "Invalid spacing around pipe delimiter",
            ValidationErrorKind::MissingSpaceAfterKeyword => "Missing space after keyword",
            ValidationErrorKind::KeywordsMustBeUppercase => "Keywords must be uppercase",
            ValidationErrorKind::MultipleSpaces => {
                "Multiple spaces found where single space expected"
            }
            ValidationErrorKind::HttpMustBeFirst => "HTTP keyword must be first",
            ValidationErrorKind::DuplicateHttpKeyword => "Duplicate HTTP keyword",
            ValidationErrorKind::UrlMustBeSecond => "URL keyword must be second",
            ValidationErrorKind::DuplicateUrlKeyword => "Duplicate URL keyword",
            ValidationErrorKind::HttpMethodMustBeUppercase => "HTTP method must be uppercase",
            ValidationErrorKind::InvalidHttpMethod => {
                "Invalid HTTP method. Only GET and POST are supported"
            }
            ValidationErrorKind::InvalidUrlFormat => "Invalid URL format",
            ValidationErrorKind::InvalidJsonInHeaders => "Invalid JSON format in HEADERS section",
            ValidationErrorKind::InvalidJsonInQuery => "Invalid JSON format in QUERY section",
            ValidationErrorKind::InvalidJsonInBody => "Invalid JSON format in BODY section",
            ValidationErrorKind::UnknownKeyword => "Unknown keyword found",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ValidationErrorKind {}

/// Failure of one parse-and-execute call.
///
/// Validation and input-shape failures are deterministic from the input alone
/// and precede any network activity; transport failures are network-level
/// errors with no remote response. Remote non-2xx statuses are not errors at
/// all -- they ride inside the execution record.
#[derive(Error, Debug)]
pub enum ReqlineError {
    /// The reqline string violated a grammar rule.
    #[error("{}", .0.as_str())]
    Validation(ValidationErrorKind),

    /// The request body did not carry a usable `reqline` field.
    #[error("reqline must be a non-empty string")]
    InvalidInput,

    /// The outbound call failed without a remote response
    /// (DNS failure, connection refused, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ReqwestError),
}

impl From<ValidationErrorKind> for ReqlineError {
    fn from(kind: ValidationErrorKind) -> Self {
        ReqlineError::Validation(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_validation_error_kind_as_str() {
        assert_eq!(
            ValidationErrorKind::InvalidHttpMethod.as_str(),
            "Invalid HTTP method. Only GET and POST are supported"
        );
        assert_eq!(
            ValidationErrorKind::InvalidPipeSpacing.as_str(),
            "Invalid spacing around pipe delimiter"
        );
        assert_eq!(
            ValidationErrorKind::InvalidJsonInHeaders.as_str(),
            "Invalid JSON format in HEADERS section"
        );
    }

    #[test]
    fn test_all_validation_kinds_have_messages() {
        for kind in ValidationErrorKind::iter() {
            assert!(
                !kind.as_str().is_empty(),
                "{:?} should have a non-empty message",
                kind
            );
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for kind in ValidationErrorKind::iter() {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_reqline_error_carries_validation_message() {
        let err = ReqlineError::from(ValidationErrorKind::UnknownKeyword);
        assert_eq!(err.to_string(), "Unknown keyword found");
    }

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(
            ReqlineError::InvalidInput.to_string(),
            "reqline must be a non-empty string"
        );
    }
}
