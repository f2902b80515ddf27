//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::HTTP_CALL_TIMEOUT;
use crate::error_handling::InitializationError;

/// Initializes the shared outbound HTTP client.
///
/// Creates a `reqwest::Client` with the fixed per-call timeout from
/// [`HTTP_CALL_TIMEOUT`]. The client is cheap to clone and safe to share
/// across concurrent calls; cloning it is the intended way to hand it to
/// request handlers.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().timeout(HTTP_CALL_TIMEOUT).build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_builds() {
        assert!(init_client().is_ok());
    }
}
