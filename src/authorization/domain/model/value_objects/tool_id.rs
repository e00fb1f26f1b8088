use crate::authorization::domain::model::enums::authorization_domain_error::AuthorizationDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ToolId(String);

impl ToolId {
    pub fn new(value: String) -> Result<Self, AuthorizationDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(AuthorizationDomainError::InvalidToolId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validates each id and drops repeats, keeping first-seen order.
    pub fn parse_set(values: Vec<String>) -> Result<Vec<Self>, AuthorizationDomainError> {
        let mut tools: Vec<Self> = Vec::with_capacity(values.len());
        for value in values {
            let tool = Self::new(value)?;
            if !tools.contains(&tool) {
                tools.push(tool);
            }
        }
        Ok(tools)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
