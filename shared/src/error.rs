use serde::{Serialize, Deserialize};

/// Error payload shape the backend returns on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
