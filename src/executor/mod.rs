//! Request execution and URL assembly.
//!
//! Translates a validated [`ParsedRequest`] into one outbound HTTP call and
//! captures the outcome -- status, payload, and wall-clock timing -- into an
//! [`ExecutionResult`]. A remote response is always a reportable outcome,
//! whatever its status; only network-level failures with no remote response
//! surface as errors.

use chrono::Utc;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::parser::{Method, ParsedRequest};

/// The request half of an execution record: what was actually sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRecord {
    /// Query parameters appended to the URL.
    pub query: Map<String, Value>,
    /// JSON body carried by POST requests (empty for GET).
    pub body: Map<String, Value>,
    /// Headers attached to the request.
    pub headers: Map<String, Value>,
    /// Base URL with the encoded query string appended.
    pub full_url: String,
}

/// The response half of an execution record: what came back, and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRecord {
    /// Status code from the remote server, 2xx or not.
    pub http_status: u16,
    /// Whole milliseconds between dispatch and settlement.
    pub duration: i64,
    /// Epoch milliseconds immediately before dispatch.
    pub request_start_timestamp: i64,
    /// Epoch milliseconds immediately after the call settled.
    pub request_stop_timestamp: i64,
    /// Remote payload, parsed as JSON when possible, otherwise the raw text.
    pub response_data: Value,
}

/// One fully executed request/response record.
///
/// Created fresh per call; nothing is retained across invocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    /// What was sent.
    pub request: RequestRecord,
    /// What came back.
    pub response: ResponseRecord,
}

/// Appends percent-escaped query parameters to a base URL.
///
/// An empty map returns the base unchanged. Otherwise every key and value is
/// escaped, pairs are joined with `&`, and the query string is appended with
/// `?` -- or `&` when the base already contains a `?`. Values are stringified
/// literally: JSON strings contribute their content, everything else its JSON
/// text.
///
/// # Examples
///
/// ```
/// use reqline::build_full_url;
/// use serde_json::{json, Map};
///
/// let mut query = Map::new();
/// query.insert("a".to_string(), json!(1));
///
/// assert_eq!(
///     build_full_url("https://example.com", &query),
///     "https://example.com?a=1"
/// );
/// ```
pub fn build_full_url(base: &str, query: &Map<String, Value>) -> String {
    if query.is_empty() {
        return base.to_string();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
        serializer.append_pair(key, &literal_text(value));
    }
    let encoded = serializer.finish();

    let joiner = if base.contains('?') { '&' } else { '?' };
    format!("{base}{joiner}{encoded}")
}

// JSON strings contribute their content; other values their JSON text.
// Numbers and strings deliberately get no type-aware formatting.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Executes a validated request and records the outcome with timing.
///
/// Dispatches one GET or POST call through the shared client (which carries
/// the fixed call timeout), stamping epoch-millisecond timestamps immediately
/// before dispatch and immediately after the call settles. The remote status
/// and payload are copied into the record verbatim, non-2xx included.
///
/// # Errors
///
/// Returns the underlying `reqwest::Error` for failures with no remote
/// response: DNS failure, connection refused, timeout. These are never
/// converted into a success-shaped record.
pub async fn execute(
    client: &Client,
    parsed: &ParsedRequest,
) -> Result<ExecutionResult, reqwest::Error> {
    let full_url = build_full_url(&parsed.url, &parsed.query);

    let mut request = match parsed.method {
        Method::Get => client.get(&full_url),
        Method::Post => client.post(&full_url).json(&parsed.body),
    };
    // Invalid header names or values surface when the call is sent.
    for (name, value) in &parsed.headers {
        request = request.header(name.as_str(), literal_text(value));
    }

    debug!("Dispatching {} {}", parsed.method, full_url);

    let start = Utc::now().timestamp_millis();
    let outcome = request.send().await;
    let stop = Utc::now().timestamp_millis();

    let response = outcome?;
    let http_status = response.status().as_u16();
    debug!(
        "{} {} answered {} in {}ms",
        parsed.method,
        full_url,
        http_status,
        stop - start
    );

    let text = response.text().await?;
    let response_data = serde_json::from_str(&text).unwrap_or(Value::String(text));

    Ok(ExecutionResult {
        request: RequestRecord {
            query: parsed.query.clone(),
            body: parsed.body.clone(),
            headers: parsed.headers.clone(),
            full_url,
        },
        response: ResponseRecord {
            http_status,
            duration: stop - start,
            request_start_timestamp: start,
            request_stop_timestamp: stop,
            response_data,
        },
    })
}
