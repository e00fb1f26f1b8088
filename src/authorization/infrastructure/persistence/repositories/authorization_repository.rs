use async_trait::async_trait;

use crate::authorization::domain::model::{
    entities::authorization_history_entry::AuthorizationHistoryEntry,
    enums::authorization_domain_error::AuthorizationDomainError, value_objects::agent_id::AgentId,
};

#[async_trait]
pub trait AuthorizationRepository: Send + Sync {
    async fn find_authorized_tools(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<String>, AuthorizationDomainError>;

    /// Swaps the agent's tool set for `entry.tools` and appends `entry` to its
    /// history in one step. Returns the set it replaced.
    async fn replace_authorized_tools(
        &self,
        agent_id: &AgentId,
        entry: AuthorizationHistoryEntry,
    ) -> Result<Vec<String>, AuthorizationDomainError>;

    async fn find_history(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<AuthorizationHistoryEntry>, AuthorizationDomainError>;

    #[cfg(any(test, feature = "test-support"))]
    async fn clear(&self) -> Result<(), AuthorizationDomainError>;
}
