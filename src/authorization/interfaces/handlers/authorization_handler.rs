use std::sync::Arc;

use validator::Validate;

use crate::{
    authorization::{
        domain::{
            model::{
                commands::update_agent_tools_command::{
                    UpdateAgentToolsCommand, UpdateAgentToolsCommandParts,
                },
                entities::tool_classification_registry::ToolClassificationRegistry,
                enums::authorization_domain_error::AuthorizationDomainError,
                queries::check_tool_access_query::CheckToolAccessQuery,
                value_objects::agent_id::AgentId,
            },
            services::{
                authorization_command_service::AuthorizationCommandService,
                authorization_query_service::AuthorizationQueryService,
            },
        },
        interfaces::handlers::resources::{
            agent_tools_resource::AgentToolsResource,
            tool_access_decision_resource::ToolAccessDecisionResource,
            update_agent_tools_resource::{
                ToolChangesResource, UpdateAgentToolsRequestResource,
                UpdateAgentToolsResponseResource,
            },
        },
    },
    shared::domain::model::value_objects::correlation_context::CorrelationContext,
};

#[derive(Clone)]
pub struct AuthorizationHandler {
    command_service: Arc<dyn AuthorizationCommandService>,
    query_service: Arc<dyn AuthorizationQueryService>,
    registry: Arc<ToolClassificationRegistry>,
}

impl AuthorizationHandler {
    pub fn new(
        command_service: Arc<dyn AuthorizationCommandService>,
        query_service: Arc<dyn AuthorizationQueryService>,
        registry: Arc<ToolClassificationRegistry>,
    ) -> Self {
        Self {
            command_service,
            query_service,
            registry,
        }
    }

    pub fn registered_tool_count(&self) -> usize {
        self.registry.len()
    }

    pub async fn get_agent_tools(
        &self,
        agent_id: &str,
    ) -> Result<AgentToolsResource, AuthorizationDomainError> {
        let agent_id = AgentId::new(agent_id.to_string())?;
        let authorized_tools = self.query_service.handle_get_authorized_tools(&agent_id).await?;

        Ok(AgentToolsResource {
            agent_id: agent_id.value().to_string(),
            total_count: authorized_tools.len(),
            authorized_tools,
        })
    }

    /// Refusals and validation failures come back in the envelope, never as
    /// `Err`.
    pub async fn update_agent_tools(
        &self,
        request: UpdateAgentToolsRequestResource,
        context: &CorrelationContext,
    ) -> UpdateAgentToolsResponseResource {
        if let Err(validation_error) = request.validate() {
            return UpdateAgentToolsResponseResource::failure(validation_error.to_string());
        }

        let command = match UpdateAgentToolsCommand::new(UpdateAgentToolsCommandParts {
            agent_id: request.agent_id,
            tools: request.tools,
            reason: request.reason,
            validate_classification: request.validate_classification,
            approval_records: request.approval_records,
        }) {
            Ok(command) => command,
            Err(error) => return UpdateAgentToolsResponseResource::failure(error.to_string()),
        };

        match self
            .command_service
            .handle_update_agent_tools(command, &self.registry, context)
            .await
        {
            Ok(outcome) => UpdateAgentToolsResponseResource {
                success: true,
                authorized_tools: Some(outcome.authorized_tools),
                changes: Some(ToolChangesResource {
                    added: outcome.report.added,
                    removed: outcome.report.removed,
                    unchanged: outcome.report.unchanged,
                }),
                audit_events: Some(outcome.audit_events),
                error: None,
            },
            Err(error) => UpdateAgentToolsResponseResource::failure(error.to_string()),
        }
    }

    /// A blank caller id starts a fresh trace instead of stamping events with
    /// an empty correlation id.
    fn adopt_correlation(correlation_id: &str) -> CorrelationContext {
        match correlation_id.trim() {
            "" => CorrelationContext::anonymous(),
            trace_id => CorrelationContext::from_trace_id(trace_id),
        }
    }

    pub async fn check_tool_access(
        &self,
        agent_id: &str,
        tool_id: &str,
        correlation_id: &str,
    ) -> Result<ToolAccessDecisionResource, AuthorizationDomainError> {
        let query = CheckToolAccessQuery::new(agent_id.to_string(), tool_id.to_string())?;
        let context = Self::adopt_correlation(correlation_id)
            .with_agent(query.agent_id().value())
            .with_tool(query.tool_id().value());

        let decision = self
            .query_service
            .handle_check_tool_access(query, &self.registry, &context)
            .await?;

        Ok(decision.into())
    }
}
