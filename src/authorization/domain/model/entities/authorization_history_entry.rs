use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AuthorizationHistoryEntry {
    pub tools: Vec<String>,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}
