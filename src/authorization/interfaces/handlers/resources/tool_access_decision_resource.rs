use serde::Serialize;

use crate::{
    authorization::domain::{
        model::enums::permission_effect::PermissionEffect,
        services::authorization_query_service::ToolAccessDecision,
    },
    shared::domain::model::events::audit_event::AuditEvent,
};

#[derive(Clone, Debug, Serialize)]
pub struct ToolAccessDecisionResource {
    pub agent_id: String,
    pub tool_id: String,
    pub effect: PermissionEffect,
    pub authorized: bool,
    pub reason: String,
    pub audit_event: AuditEvent,
}

impl From<ToolAccessDecision> for ToolAccessDecisionResource {
    fn from(decision: ToolAccessDecision) -> Self {
        Self {
            authorized: decision.effect.is_allow(),
            agent_id: decision.agent_id,
            tool_id: decision.tool_id,
            effect: decision.effect,
            reason: decision.reason,
            audit_event: decision.audit_event,
        }
    }
}
