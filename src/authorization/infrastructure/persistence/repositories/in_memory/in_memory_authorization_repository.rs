use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::authorization::{
    domain::model::{
        entities::authorization_history_entry::AuthorizationHistoryEntry,
        enums::authorization_domain_error::AuthorizationDomainError,
        value_objects::agent_id::AgentId,
    },
    infrastructure::persistence::repositories::authorization_repository::AuthorizationRepository,
};

#[derive(Default)]
struct AuthorizationState {
    current: HashMap<AgentId, Vec<String>>,
    history: HashMap<AgentId, Vec<AuthorizationHistoryEntry>>,
}

#[derive(Default)]
pub struct InMemoryAuthorizationRepository {
    state: RwLock<AuthorizationState>,
}

impl InMemoryAuthorizationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorizationRepository for InMemoryAuthorizationRepository {
    async fn find_authorized_tools(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<String>, AuthorizationDomainError> {
        Ok(self
            .state
            .read()
            .await
            .current
            .get(agent_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_authorized_tools(
        &self,
        agent_id: &AgentId,
        entry: AuthorizationHistoryEntry,
    ) -> Result<Vec<String>, AuthorizationDomainError> {
        let mut state = self.state.write().await;
        let previous = state
            .current
            .insert(agent_id.clone(), entry.tools.clone())
            .unwrap_or_default();
        state.history.entry(agent_id.clone()).or_default().push(entry);
        Ok(previous)
    }

    async fn find_history(
        &self,
        agent_id: &AgentId,
    ) -> Result<Vec<AuthorizationHistoryEntry>, AuthorizationDomainError> {
        Ok(self
            .state
            .read()
            .await
            .history
            .get(agent_id)
            .cloned()
            .unwrap_or_default())
    }

    #[cfg(any(test, feature = "test-support"))]
    async fn clear(&self) -> Result<(), AuthorizationDomainError> {
        let mut state = self.state.write().await;
        state.current.clear();
        state.history.clear();
        Ok(())
    }
}
