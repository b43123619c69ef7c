//! Transport collaborator interface and gateway failure translation
//!
//! Real backends talk to their processor through a [`Transport`]: hand it a
//! request payload, get back either a structured success payload or a
//! [`GatewayFailure`], a numeric status code plus the raw error body, when
//! one was received. [`translate_failure`] turns that pair into one typed
//! [`PaymentError`] from the shared taxonomy.
//!
//! Body parsing is advisory, never load-bearing: a gateway-supplied message
//! is extracted on a best-effort basis and any parse failure is swallowed,
//! only reducing the detail on the resulting error.

use crate::types::PaymentError;

/// Transport-level failure: status code plus the raw response body, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayFailure {
    pub status: u16,
    pub body: Option<String>,
}

impl GatewayFailure {
    pub fn new(status: u16, body: Option<String>) -> Self {
        GatewayFailure { status, body }
    }
}

/// Wire-level request execution interface
///
/// Implementations (HTTP clients for concrete processors) live outside this
/// crate; the core only consumes the result shape.
pub trait Transport: Send + Sync {
    fn execute(&self, request: serde_json::Value) -> Result<serde_json::Value, GatewayFailure>;
}

/// Translate a transport failure into one typed error
///
/// Status mapping: 400 bad request, 401 unauthorized, 402 card error,
/// 404 not found, 500/502/503/504 server unavailable. Any other status maps
/// to [`PaymentError::Unmapped`] carrying the status only; the inner cause
/// passes through without a gateway message.
pub fn translate_failure(failure: &GatewayFailure) -> PaymentError {
    let message = failure.body.as_deref().and_then(extract_error_message);
    match failure.status {
        400 => PaymentError::BadRequest { message },
        401 => PaymentError::Unauthorized { message },
        402 => PaymentError::CardError { message },
        404 => PaymentError::NotFound { message },
        500 | 502 | 503 | 504 => PaymentError::ServerUnavailable {
            status: failure.status,
            message,
        },
        status => PaymentError::Unmapped { status },
    }
}

/// Best-effort extraction of the gateway's human-readable message
///
/// Looks for `error.message` in a JSON body. Anything unexpected (invalid
/// JSON, a non-object, missing keys, a non-string message) yields `None`;
/// extraction failures never escalate.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
