//! API error body
//!
//! The backend returns bare payloads on success and a single-field error
//! envelope on failure. The client surfaces `error` verbatim when present.

use serde::{Deserialize, Serialize};

/// Error envelope returned by the backend on non-2xx responses
///
/// ```json
/// { "error": "Invalid promo code" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
