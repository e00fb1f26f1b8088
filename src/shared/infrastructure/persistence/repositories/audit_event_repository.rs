use async_trait::async_trait;

use crate::shared::domain::model::{
    enums::evidence_error::EvidenceError, events::audit_event::AuditEvent,
};

#[async_trait]
pub trait AuditEventRepository: Send + Sync {
    async fn save_event(&self, event: &AuditEvent) -> Result<(), EvidenceError>;

    async fn list_events(&self) -> Result<Vec<AuditEvent>, EvidenceError>;

    async fn find_by_correlation_id(
        &self,
        correlation_id: &str,
    ) -> Result<Vec<AuditEvent>, EvidenceError>;
}
