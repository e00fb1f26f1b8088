use crate::authorization::domain::model::{
    enums::authorization_domain_error::AuthorizationDomainError,
    value_objects::{agent_id::AgentId, tool_id::ToolId},
};

#[derive(Clone, Debug)]
pub struct CheckToolAccessQuery {
    agent_id: AgentId,
    tool_id: ToolId,
}

impl CheckToolAccessQuery {
    pub fn new(agent_id: String, tool_id: String) -> Result<Self, AuthorizationDomainError> {
        Ok(Self {
            agent_id: AgentId::new(agent_id)?,
            tool_id: ToolId::new(tool_id)?,
        })
    }

    pub fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }
    pub fn tool_id(&self) -> &ToolId {
        &self.tool_id
    }
}
