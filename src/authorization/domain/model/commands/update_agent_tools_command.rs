use std::collections::BTreeMap;

use crate::authorization::domain::model::{
    commands::set_authorized_tools_command::SetAuthorizedToolsCommand,
    entities::approval_record::ApprovalRecord,
    enums::authorization_domain_error::AuthorizationDomainError,
    value_objects::{agent_id::AgentId, tool_id::ToolId},
};

#[derive(Clone, Debug)]
pub struct UpdateAgentToolsCommand {
    set_command: SetAuthorizedToolsCommand,
    validate_classification: bool,
    approval_records: BTreeMap<String, ApprovalRecord>,
}

pub struct UpdateAgentToolsCommandParts {
    pub agent_id: String,
    pub tools: Vec<String>,
    pub reason: String,
    pub validate_classification: bool,
    pub approval_records: BTreeMap<String, ApprovalRecord>,
}

impl UpdateAgentToolsCommand {
    pub fn new(parts: UpdateAgentToolsCommandParts) -> Result<Self, AuthorizationDomainError> {
        Ok(Self {
            set_command: SetAuthorizedToolsCommand::new(parts.agent_id, parts.tools, parts.reason)?,
            validate_classification: parts.validate_classification,
            approval_records: parts.approval_records,
        })
    }

    pub fn agent_id(&self) -> &AgentId {
        self.set_command.agent_id()
    }
    pub fn tools(&self) -> &[ToolId] {
        self.set_command.tools()
    }
    pub fn validate_classification(&self) -> bool {
        self.validate_classification
    }

    pub fn approval_for(&self, tool_id: &str) -> Option<&ApprovalRecord> {
        self.approval_records.get(tool_id)
    }

    pub fn into_set_command(self) -> SetAuthorizedToolsCommand {
        self.set_command
    }

    pub fn set_command(&self) -> &SetAuthorizedToolsCommand {
        &self.set_command
    }
}
