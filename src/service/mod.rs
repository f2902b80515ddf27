//! Orchestration and the HTTP boundary.
//!
//! [`parse_and_execute`] sequences the input-shape check, the syntax
//! validator, and the request executor; the rest of the module is the thin
//! axum layer that exposes it:
//!
//! - `POST /` - accepts `{ "reqline": "..." }`, answers with the execution
//!   record, or `{ "error": true, "message": ... }` on failure
//! - `GET /health` - liveness probe

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::ReqlineError;
use crate::executor::{execute, ExecutionResult};
use crate::initialization::init_client;
use crate::parser::validate;

/// Shared state for the reqline server.
#[derive(Clone)]
pub struct ServerState {
    /// Shared outbound HTTP client; carries the fixed call timeout.
    pub client: Client,
}

/// JSON envelope returned for failed calls.
#[derive(Serialize)]
struct ErrorBody {
    error: bool,
    message: String,
}

// Shape-only check on the incoming mapping: `reqline` must exist and be a
// non-empty string. Anything else about the DSL text is the validator's job.
fn extract_reqline(input: &Value) -> Result<&str, ReqlineError> {
    match input.get("reqline").and_then(Value::as_str) {
        Some(reqline) if !reqline.is_empty() => Ok(reqline),
        _ => Err(ReqlineError::InvalidInput),
    }
}

/// Validates the input shape, then sequences validator and executor.
///
/// Failures from either stage propagate unchanged and distinct in kind:
/// grammar violations as [`ReqlineError::Validation`], network-level failures
/// as [`ReqlineError::Transport`]. A remote non-2xx answer is not a failure
/// and comes back inside the `Ok` record.
pub async fn parse_and_execute(
    client: &Client,
    input: &Value,
) -> Result<ExecutionResult, ReqlineError> {
    let reqline = extract_reqline(input)?;
    let parsed = validate(reqline)?;
    let result = execute(client, &parsed).await?;
    Ok(result)
}

/// Builds the application router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", post(reqline_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn reqline_handler(State(state): State<ServerState>, Json(input): Json<Value>) -> Response {
    match parse_and_execute(&state.client, &input).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            let status = match &err {
                ReqlineError::Validation(_) | ReqlineError::InvalidInput => StatusCode::BAD_REQUEST,
                ReqlineError::Transport(_) => StatusCode::BAD_GATEWAY,
            };
            warn!("Reqline call rejected ({}): {}", status.as_u16(), err);
            let body = ErrorBody {
                error: true,
                message: err.to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

async fn health_handler() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

/// Binds the server and serves requests until the process is stopped.
///
/// # Errors
///
/// Returns an error if the outbound client cannot be built, the listener
/// cannot bind, or the server loop fails.
pub async fn run_server(config: &Config) -> Result<(), anyhow::Error> {
    let client = init_client()?;
    let app = router(ServerState { client });

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind reqline server to {}: {}", addr, e))?;

    info!("Reqline server listening on http://{}/", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Reqline server error: {}", e))?;

    Ok(())
}
