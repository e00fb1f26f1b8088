use async_trait::async_trait;

use crate::{
    authorization::domain::model::{
        entities::{
            authorization_history_entry::AuthorizationHistoryEntry,
            tool_classification_registry::ToolClassificationRegistry,
        },
        enums::{
            authorization_domain_error::AuthorizationDomainError,
            classification_tier::ClassificationTier, permission_effect::PermissionEffect,
        },
        queries::check_tool_access_query::CheckToolAccessQuery,
        value_objects::agent_id::AgentId,
    },
    shared::domain::model::{
        events::audit_event::AuditEvent, value_objects::correlation_context::CorrelationContext,
    },
};

#[derive(Clone, Debug)]
pub struct ToolAccessDecision {
    pub agent_id: String,
    pub tool_id: String,
    pub effect: PermissionEffect,
    pub reason: String,
    pub classification: Option<ClassificationTier>,
    pub audit_event: AuditEvent,
}

#[async_trait]
pub trait AuthorizationQueryService: Send + Sync {
    async fn handle_get_authorized_tools(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<String>, AuthorizationDomainError>;

    async fn handle_differential_report(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<AuthorizationHistoryEntry>, AuthorizationDomainError>;

    async fn handle_check_tool_access(
        &self,
        query: CheckToolAccessQuery,
        registry: &ToolClassificationRegistry,
        context: &CorrelationContext,
    ) -> Result<ToolAccessDecision, AuthorizationDomainError>;
}
