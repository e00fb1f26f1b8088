use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AuthorizationChangeReport {
    pub agent_id: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub unchanged: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl AuthorizationChangeReport {
    /// `added` and `unchanged` follow the order of `current`, `removed` the
    /// order of `previous`.
    pub fn between(
        agent_id: &str,
        previous: &[String],
        current: &[String],
        timestamp: DateTime<Utc>,
    ) -> Self {
        let added = current
            .iter()
            .filter(|tool| !previous.contains(tool))
            .cloned()
            .collect();
        let unchanged = current
            .iter()
            .filter(|tool| previous.contains(tool))
            .cloned()
            .collect();
        let removed = previous
            .iter()
            .filter(|tool| !current.contains(tool))
            .cloned()
            .collect();

        Self {
            agent_id: agent_id.to_string(),
            added,
            removed,
            unchanged,
            timestamp,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}
