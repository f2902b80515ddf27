//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the
//! application: the outbound call timeout and the server bind defaults.

use std::time::Duration;

/// Timeout for a single outbound HTTP call.
///
/// The remote server gets a fixed 10 seconds to settle (headers and body);
/// a call that exceeds this surfaces as a transport error. There is no retry.
pub const HTTP_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Default address the server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 8080;
