use std::fmt;

use crate::authorization::domain::model::enums::authorization_domain_error::AuthorizationDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(value: String) -> Result<Self, AuthorizationDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AuthorizationDomainError::InvalidAgentId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
