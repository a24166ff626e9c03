use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolResponse {
    pub code: String,
}

/// The pools and guesses counters include a seed row owned by the backend,
/// so the page shows one less than the raw count. The users counter is
/// shown as-is.
pub fn displayed_count(count: i64) -> i64 {
    count - 1
}
