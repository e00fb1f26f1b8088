use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthorizationDomainError {
    #[error("agent id is invalid")]
    InvalidAgentId,

    #[error("tool id is invalid")]
    InvalidToolId,

    #[error("tool `{tool_id}` ({tier}) rejected: {reason}")]
    ClassificationRejected {
        tool_id: String,
        tier: String,
        reason: String,
    },

    #[error("classification registry is unreadable: {0}")]
    RegistryUnreadable(String),
}
