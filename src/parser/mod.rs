//! Reqline syntax validation.
//!
//! Scans a raw reqline string into a [`ParsedRequest`], enforcing the grammar:
//!
//! ```text
//! HTTP <METHOD> | URL <url> [| HEADERS <json>] [| QUERY <json>] [| BODY <json>]
//! ```
//!
//! Exactly one space surrounds every pipe, exactly one space separates each
//! keyword from its value, keywords are uppercase, HTTP is the first segment
//! and URL the second. Every check is a plain substring/position scan; no
//! pattern-matching engine is involved, which keeps the validator trivially
//! portable. Scanning stops at the first violated rule.

use serde_json::{Map, Value};

use crate::error_handling::ValidationErrorKind;

/// The two verbs a reqline may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET request; carries no body.
    Get,
    /// POST request; carries the BODY section as JSON.
    Post,
}

impl Method {
    /// Returns the wire form of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated, structured form of a reqline, ready for execution.
///
/// Created fresh per call and owned by the caller; nothing is cached or
/// shared between invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    /// Request method (GET or POST).
    pub method: Method,
    /// Base URL, guaranteed to start with `http://` or `https://` and have
    /// content after the scheme.
    pub url: String,
    /// Headers to attach to the request; empty when HEADERS was absent.
    pub headers: Map<String, Value>,
    /// Query parameters to append to the URL; empty when QUERY was absent.
    pub query: Map<String, Value>,
    /// JSON body for POST requests; empty when BODY was absent.
    pub body: Map<String, Value>,
}

/// Validates a reqline string and produces its structured form.
///
/// Fails with the [`ValidationErrorKind`] of the first violated rule; no
/// errors are accumulated and no network activity happens here.
///
/// # Examples
///
/// ```
/// use reqline::{validate, Method};
///
/// let parsed = validate(r#"HTTP GET | URL https://example.com | QUERY {"a": 1}"#).unwrap();
/// assert_eq!(parsed.method, Method::Get);
/// assert_eq!(parsed.url, "https://example.com");
/// ```
pub fn validate(reqline: &str) -> Result<ParsedRequest, ValidationErrorKind> {
    let trimmed = reqline.trim();
    if trimmed.is_empty() {
        return Err(ValidationErrorKind::EmptyInput);
    }

    // Without any pipe the segment scan below can't produce a useful message,
    // so diagnose which keyword (or the delimiter itself) is missing.
    if !trimmed.contains('|') {
        return Err(diagnose_unpiped(trimmed));
    }

    let parts: Vec<&str> = trimmed.split('|').collect();
    for pair in parts.windows(2) {
        if !ends_with_single_space(pair[0]) || !starts_with_single_space(pair[1]) {
            return Err(ValidationErrorKind::InvalidPipeSpacing);
        }
    }

    let mut method: Option<Method> = None;
    let mut url: Option<String> = None;
    let mut headers = Map::new();
    let mut query = Map::new();
    let mut body = Map::new();

    for (index, part) in parts.iter().enumerate() {
        let segment = part.trim();
        if segment.is_empty() {
            return Err(ValidationErrorKind::InvalidPipeSpacing);
        }

        let Some(space_at) = segment.find(' ') else {
            return Err(ValidationErrorKind::MissingSpaceAfterKeyword);
        };
        let keyword = &segment[..space_at];
        let value = &segment[space_at + 1..];

        if keyword != keyword.to_uppercase() {
            return Err(ValidationErrorKind::KeywordsMustBeUppercase);
        }
        if segment.contains("  ") {
            return Err(ValidationErrorKind::MultipleSpaces);
        }

        match keyword {
            "HTTP" => {
                if method.is_some() {
                    return Err(ValidationErrorKind::DuplicateHttpKeyword);
                }
                if index != 0 {
                    return Err(ValidationErrorKind::HttpMustBeFirst);
                }
                if value != value.to_uppercase() {
                    return Err(ValidationErrorKind::HttpMethodMustBeUppercase);
                }
                method = Some(match value {
                    "GET" => Method::Get,
                    "POST" => Method::Post,
                    _ => return Err(ValidationErrorKind::InvalidHttpMethod),
                });
            }
            "URL" => {
                if url.is_some() {
                    return Err(ValidationErrorKind::DuplicateUrlKeyword);
                }
                if index != 1 {
                    return Err(ValidationErrorKind::UrlMustBeSecond);
                }
                if !has_supported_scheme(value) {
                    return Err(ValidationErrorKind::InvalidUrlFormat);
                }
                url = Some(value.to_string());
            }
            // Repeats overwrite the earlier value (last wins); the mutual
            // order of these three is unconstrained.
            "HEADERS" => {
                headers = parse_json_object(value, ValidationErrorKind::InvalidJsonInHeaders)?
            }
            "QUERY" => query = parse_json_object(value, ValidationErrorKind::InvalidJsonInQuery)?,
            "BODY" => body = parse_json_object(value, ValidationErrorKind::InvalidJsonInBody)?,
            _ => return Err(ValidationErrorKind::UnknownKeyword),
        }
    }

    let Some(method) = method else {
        return Err(ValidationErrorKind::MissingHttpKeyword);
    };
    let Some(url) = url else {
        return Err(ValidationErrorKind::MissingUrlKeyword);
    };

    Ok(ParsedRequest {
        method,
        url,
        headers,
        query,
        body,
    })
}

/// Picks the most specific error for an input with no pipe character.
///
/// Looks for the literal words HTTP/http and URL/url among the
/// whitespace-delimited tokens: a missing keyword beats the generic
/// missing-delimiter message.
fn diagnose_unpiped(trimmed: &str) -> ValidationErrorKind {
    let mut has_http_word = false;
    let mut has_url_word = false;
    for word in trimmed.split_whitespace() {
        if word == "HTTP" || word == "http" {
            has_http_word = true;
        }
        if word == "URL" || word == "url" {
            has_url_word = true;
        }
    }

    if !has_http_word {
        ValidationErrorKind::MissingHttpKeyword
    } else if !has_url_word {
        ValidationErrorKind::MissingUrlKeyword
    } else {
        ValidationErrorKind::MissingPipeDelimiter
    }
}

fn ends_with_single_space(raw: &str) -> bool {
    raw.ends_with(' ') && !raw.ends_with("  ")
}

fn starts_with_single_space(raw: &str) -> bool {
    raw.starts_with(' ') && !raw.starts_with("  ")
}

fn has_supported_scheme(value: &str) -> bool {
    for scheme in ["http://", "https://"] {
        if let Some(rest) = value.strip_prefix(scheme) {
            return !rest.is_empty();
        }
    }
    false
}

fn parse_json_object(
    raw: &str,
    on_error: ValidationErrorKind,
) -> Result<Map<String, Value>, ValidationErrorKind> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(on_error),
    }
}
