use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    authorization::{
        domain::{
            model::{
                commands::{
                    set_authorized_tools_command::SetAuthorizedToolsCommand,
                    update_agent_tools_command::UpdateAgentToolsCommand,
                },
                entities::{
                    authorization_change_report::AuthorizationChangeReport,
                    authorization_history_entry::AuthorizationHistoryEntry,
                    tool_classification_registry::ToolClassificationRegistry,
                },
                enums::{
                    authorization_domain_error::AuthorizationDomainError,
                    permission_effect::PermissionEffect,
                },
            },
            services::{
                authorization_command_service::{
                    AuthorizationCommandService, AuthorizationUpdateOutcome,
                },
                classification_policy::{ClassificationDecision, validate_tool_authorization},
            },
        },
        infrastructure::persistence::repositories::authorization_repository::AuthorizationRepository,
    },
    shared::{
        domain::{
            model::{
                events::audit_event::AuditEvent,
                value_objects::correlation_context::CorrelationContext,
            },
            services::evidence_constructor::{AuthorizationDecisionEvidence, EvidenceConstructor},
        },
        infrastructure::{
            clock::Clock,
            persistence::repositories::audit_event_repository::AuditEventRepository,
        },
    },
};

const UNCLASSIFIED: &str = "UNCLASSIFIED";

pub struct AuthorizationCommandServiceImpl {
    authorization_repository: Arc<dyn AuthorizationRepository>,
    audit_repository: Arc<dyn AuditEventRepository>,
    evidence: EvidenceConstructor,
    clock: Arc<dyn Clock>,
}

impl AuthorizationCommandServiceImpl {
    pub fn new(
        authorization_repository: Arc<dyn AuthorizationRepository>,
        audit_repository: Arc<dyn AuditEventRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            authorization_repository,
            audit_repository,
            evidence: EvidenceConstructor::new(clock.clone()),
            clock,
        }
    }

    fn check_classifications(
        command: &UpdateAgentToolsCommand,
        registry: &ToolClassificationRegistry,
    ) -> Result<Vec<ClassificationDecision>, AuthorizationDomainError> {
        let mut decisions = Vec::with_capacity(command.tools().len());
        for tool in command.tools() {
            let decision =
                validate_tool_authorization(tool.value(), command.approval_for(tool.value()), registry);
            if !decision.authorized {
                return Err(AuthorizationDomainError::ClassificationRejected {
                    tool_id: tool.value().to_string(),
                    tier: decision
                        .tier
                        .map(|tier| tier.as_str())
                        .unwrap_or(UNCLASSIFIED)
                        .to_string(),
                    reason: decision.reason,
                });
            }
            decisions.push(decision);
        }
        Ok(decisions)
    }

    async fn record(&self, event: &AuditEvent) {
        if let Err(error) = self.audit_repository.save_event(event).await {
            warn!(correlation_id = %event.correlation_id(), %error, "failed to record authorization event");
        }
    }
}

#[async_trait]
impl AuthorizationCommandService for AuthorizationCommandServiceImpl {
    async fn handle_set_authorized_tools(
        &self,
        command: SetAuthorizedToolsCommand,
    ) -> Result<AuthorizationChangeReport, AuthorizationDomainError> {
        let now = self.clock.now();
        let tools = command.tool_values();

        let previous = self
            .authorization_repository
            .replace_authorized_tools(
                command.agent_id(),
                AuthorizationHistoryEntry {
                    tools: tools.clone(),
                    reason: command.reason().to_string(),
                    timestamp: now,
                },
            )
            .await?;

        let report =
            AuthorizationChangeReport::between(command.agent_id().value(), &previous, &tools, now);

        info!(
            agent_id = %command.agent_id(),
            added = ?report.added,
            removed = ?report.removed,
            reason = command.reason(),
            "authorized tools replaced"
        );

        Ok(report)
    }

    async fn handle_update_agent_tools(
        &self,
        command: UpdateAgentToolsCommand,
        registry: &ToolClassificationRegistry,
        context: &CorrelationContext,
    ) -> Result<AuthorizationUpdateOutcome, AuthorizationDomainError> {
        let decisions = if command.validate_classification() {
            match Self::check_classifications(&command, registry) {
                Ok(decisions) => Some(decisions),
                Err(error) => {
                    warn!(
                        agent_id = %command.agent_id(),
                        correlation_id = %context.trace_id(),
                        %error,
                        "authorization update refused"
                    );
                    return Err(error);
                }
            }
        } else {
            None
        };

        let agent_id = command.agent_id().value().to_string();
        let update_reason = command.set_command().reason().to_string();
        let authorized_tools = command.set_command().tool_values();
        let approvals = authorized_tools
            .iter()
            .map(|tool| {
                command
                    .approval_for(tool)
                    .map(|record| record.approved_by.clone())
            })
            .collect::<Vec<_>>();

        let report = self
            .handle_set_authorized_tools(command.into_set_command())
            .await?;

        let mut audit_events = Vec::with_capacity(authorized_tools.len());
        for (index, tool_id) in authorized_tools.iter().enumerate() {
            let reason = decisions
                .as_ref()
                .and_then(|decisions| decisions.get(index))
                .map(|decision| decision.reason.clone())
                .unwrap_or_else(|| update_reason.clone());
            let classification = registry.classify(tool_id);

            let event = self.evidence.construct_authorization_decision_event(
                context,
                AuthorizationDecisionEvidence {
                    agent_id: &agent_id,
                    tool_id,
                    effect: PermissionEffect::Allow.as_str(),
                    reason: &reason,
                    classification: classification.as_ref().map(|tier| tier.as_str()),
                    approved_by: approvals.get(index).and_then(|a| a.as_deref()),
                },
            );
            self.record(&event).await;
            audit_events.push(event);
        }

        Ok(AuthorizationUpdateOutcome {
            report,
            authorized_tools,
            audit_events,
        })
    }

    #[cfg(any(test, feature = "test-support"))]
    async fn clear_authorization_store(&self) -> Result<(), AuthorizationDomainError> {
        self.authorization_repository.clear().await
    }
}
