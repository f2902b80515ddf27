//! reqline library: parse-and-execute HTTP request functionality
//!
//! This library accepts a single-line, pipe-delimited request description
//! ("reqline") such as:
//!
//! ```text
//! HTTP GET | URL https://example.com | QUERY {"page": 1}
//! ```
//!
//! validates it against a strict grammar (spacing, case, keyword ordering),
//! and executes the described HTTP call, returning a record that carries the
//! full request, the remote response, and millisecond-precision timing.
//!
//! # Example
//!
//! ```no_run
//! use reqline::{initialization::init_client, parse_and_execute};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client()?;
//! let input = json!({ "reqline": "HTTP GET | URL https://example.com" });
//!
//! let record = parse_and_execute(&client, &input).await?;
//! println!("{} in {}ms", record.response.http_status, record.response.duration);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod executor;
pub mod initialization;
mod parser;
mod service;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ReqlineError, ValidationErrorKind};
pub use executor::{build_full_url, execute, ExecutionResult, RequestRecord, ResponseRecord};
pub use parser::{validate, Method, ParsedRequest};
pub use service::{parse_and_execute, router, run_server, ServerState};
