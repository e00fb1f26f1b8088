use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub approved_by: String,
    pub approved_at: DateTime<Utc>,
    #[serde(default)]
    pub justification: String,
}

impl ApprovalRecord {
    pub fn new(
        approved_by: impl Into<String>,
        approved_at: DateTime<Utc>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            approved_by: approved_by.into(),
            approved_at,
            justification: justification.into(),
        }
    }
}
