use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    authorization::{
        domain::{
            model::{
                entities::{
                    authorization_history_entry::AuthorizationHistoryEntry,
                    tool_classification_registry::ToolClassificationRegistry,
                },
                enums::{
                    authorization_domain_error::AuthorizationDomainError,
                    permission_effect::PermissionEffect,
                },
                queries::check_tool_access_query::CheckToolAccessQuery,
                value_objects::agent_id::AgentId,
            },
            services::authorization_query_service::{
                AuthorizationQueryService, ToolAccessDecision,
            },
        },
        infrastructure::persistence::repositories::authorization_repository::AuthorizationRepository,
    },
    shared::{
        domain::{
            model::value_objects::correlation_context::CorrelationContext,
            services::evidence_constructor::{AuthorizationDecisionEvidence, EvidenceConstructor},
        },
        infrastructure::{
            clock::Clock,
            persistence::repositories::audit_event_repository::AuditEventRepository,
        },
    },
};

pub struct AuthorizationQueryServiceImpl {
    authorization_repository: Arc<dyn AuthorizationRepository>,
    audit_repository: Arc<dyn AuditEventRepository>,
    evidence: EvidenceConstructor,
}

impl AuthorizationQueryServiceImpl {
    pub fn new(
        authorization_repository: Arc<dyn AuthorizationRepository>,
        audit_repository: Arc<dyn AuditEventRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            authorization_repository,
            audit_repository,
            evidence: EvidenceConstructor::new(clock),
        }
    }
}

#[async_trait]
impl AuthorizationQueryService for AuthorizationQueryServiceImpl {
    async fn handle_get_authorized_tools(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<String>, AuthorizationDomainError> {
        self.authorization_repository
            .find_authorized_tools(agent_id)
            .await
    }

    async fn handle_differential_report(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<AuthorizationHistoryEntry>, AuthorizationDomainError> {
        self.authorization_repository.find_history(agent_id).await
    }

    async fn handle_check_tool_access(
        &self,
        query: CheckToolAccessQuery,
        registry: &ToolClassificationRegistry,
        context: &CorrelationContext,
    ) -> Result<ToolAccessDecision, AuthorizationDomainError> {
        let agent_id = query.agent_id().value();
        let tool_id = query.tool_id().value();

        let tools = self
            .authorization_repository
            .find_authorized_tools(query.agent_id())
            .await?;
        let effect = PermissionEffect::from_authorized(tools.iter().any(|t| t == tool_id));
        let reason = match effect {
            PermissionEffect::Allow => format!("{tool_id} in authorized list"),
            PermissionEffect::Deny => format!("{tool_id} NOT in authorized list"),
        };
        let classification = registry.classify(tool_id);

        let audit_event = self.evidence.construct_authorization_decision_event(
            context,
            AuthorizationDecisionEvidence {
                agent_id,
                tool_id,
                effect: effect.as_str(),
                reason: &reason,
                classification: classification.as_ref().map(|tier| tier.as_str()),
                approved_by: None,
            },
        );
        if let Err(error) = self.audit_repository.save_event(&audit_event).await {
            warn!(correlation_id = %context.trace_id(), %error, "failed to record tool access decision");
        }

        if !effect.is_allow() {
            info!(
                agent_id,
                tool_id,
                correlation_id = %context.trace_id(),
                "tool access denied"
            );
        }

        Ok(ToolAccessDecision {
            agent_id: agent_id.to_string(),
            tool_id: tool_id.to_string(),
            effect,
            reason,
            classification,
            audit_event,
        })
    }
}
