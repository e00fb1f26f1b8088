use async_trait::async_trait;

use crate::{
    authorization::domain::model::{
        commands::{
            set_authorized_tools_command::SetAuthorizedToolsCommand,
            update_agent_tools_command::UpdateAgentToolsCommand,
        },
        entities::{
            authorization_change_report::AuthorizationChangeReport,
            tool_classification_registry::ToolClassificationRegistry,
        },
        enums::authorization_domain_error::AuthorizationDomainError,
    },
    shared::domain::model::{
        events::audit_event::AuditEvent, value_objects::correlation_context::CorrelationContext,
    },
};

#[derive(Clone, Debug)]
pub struct AuthorizationUpdateOutcome {
    pub report: AuthorizationChangeReport,
    pub authorized_tools: Vec<String>,
    pub audit_events: Vec<AuditEvent>,
}

#[async_trait]
pub trait AuthorizationCommandService: Send + Sync {
    async fn handle_set_authorized_tools(
        &self,
        command: SetAuthorizedToolsCommand,
    ) -> Result<AuthorizationChangeReport, AuthorizationDomainError>;

    /// Classification checks run against every target tool before the store
    /// is touched; one rejection refuses the whole update.
    async fn handle_update_agent_tools(
        &self,
        command: UpdateAgentToolsCommand,
        registry: &ToolClassificationRegistry,
        context: &CorrelationContext,
    ) -> Result<AuthorizationUpdateOutcome, AuthorizationDomainError>;

    #[cfg(any(test, feature = "test-support"))]
    async fn clear_authorization_store(&self) -> Result<(), AuthorizationDomainError>;
}
