use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    authorization::domain::model::entities::approval_record::ApprovalRecord,
    shared::domain::model::events::audit_event::AuditEvent,
};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct UpdateAgentToolsRequestResource {
    #[validate(length(min = 1))]
    pub agent_id: String,
    pub tools: Vec<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default = "default_validate_classification")]
    pub validate_classification: bool,
    #[serde(default)]
    pub approval_records: BTreeMap<String, ApprovalRecord>,
}

fn default_validate_classification() -> bool {
    true
}

#[derive(Clone, Debug, Serialize)]
pub struct ToolChangesResource {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub unchanged: Vec<String>,
}

/// Update envelope. A refused update carries only `success = false` and the
/// error text.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateAgentToolsResponseResource {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<ToolChangesResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_events: Option<Vec<AuditEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateAgentToolsResponseResource {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            authorized_tools: None,
            changes: None,
            audit_events: None,
            error: Some(error.into()),
        }
    }
}
