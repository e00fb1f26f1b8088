use crate::authorization::domain::model::{
    enums::authorization_domain_error::AuthorizationDomainError,
    value_objects::{agent_id::AgentId, tool_id::ToolId},
};

#[derive(Clone, Debug)]
pub struct SetAuthorizedToolsCommand {
    agent_id: AgentId,
    tools: Vec<ToolId>,
    reason: String,
}

impl SetAuthorizedToolsCommand {
    pub fn new(
        agent_id: String,
        tools: Vec<String>,
        reason: String,
    ) -> Result<Self, AuthorizationDomainError> {
        Ok(Self {
            agent_id: AgentId::new(agent_id)?,
            tools: ToolId::parse_set(tools)?,
            reason: reason.trim().to_string(),
        })
    }

    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }
    pub fn tools(&self) -> &[ToolId] {
        &self.tools
    }
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn tool_values(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.value().to_string()).collect()
    }
}
