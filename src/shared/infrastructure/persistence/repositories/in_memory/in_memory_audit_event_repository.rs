use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::shared::{
    domain::model::{enums::evidence_error::EvidenceError, events::audit_event::AuditEvent},
    infrastructure::persistence::repositories::audit_event_repository::AuditEventRepository,
};

/// Append-only audit trail kept in process memory, in emission order.
#[derive(Default)]
pub struct InMemoryAuditEventRepository {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(any(test, feature = "test-support"))]
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl AuditEventRepository for InMemoryAuditEventRepository {
    async fn save_event(&self, event: &AuditEvent) -> Result<(), EvidenceError> {
        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<AuditEvent>, EvidenceError> {
        Ok(self.events.read().await.clone())
    }

    async fn find_by_correlation_id(
        &self,
        correlation_id: &str,
    ) -> Result<Vec<AuditEvent>, EvidenceError> {
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.correlation_id() == correlation_id)
            .cloned()
            .collect())
    }
}
