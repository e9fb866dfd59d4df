//! Wire error body
//!
//! Non-success responses from the REST backend carry a JSON object with a
//! human-readable `message`.
//!
//! ```json
//! { "message": "Employee UIAB123 not found" }
//! ```

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-success status codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
