use async_trait::async_trait;

use crate::{
    revocation::domain::model::{
        entities::{
            revocation_record::RevocationRecord,
            sla_metrics::{SlaMetricDatum, SlaMetrics},
        },
        enums::revocation_domain_error::RevocationDomainError,
        value_objects::revocation_id::RevocationId,
    },
    shared::domain::model::value_objects::correlation_context::CorrelationContext,
};

#[async_trait]
pub trait RevocationQueryService: Send + Sync {
    async fn handle_get_revocation_status(
        &self,
        revocation_id: &RevocationId,
    ) -> Result<RevocationRecord, RevocationDomainError>;

    async fn handle_is_subject_revoked(
        &self,
        subject_type: &str,
        subject_id: &str,
    ) -> Result<bool, RevocationDomainError>;

    /// Like `handle_is_subject_revoked`, and records a
    /// `revocation_access_denied` event when the subject is revoked.
    async fn handle_check_subject_access(
        &self,
        subject_type: &str,
        subject_id: &str,
        attempted_action: &str,
        context: &CorrelationContext,
    ) -> Result<bool, RevocationDomainError>;

    async fn handle_list_revocations(&self) -> Result<Vec<RevocationRecord>, RevocationDomainError>;

    async fn handle_compute_sla_metrics(&self) -> Result<SlaMetrics, RevocationDomainError>;

    async fn handle_emit_sla_metric(&self) -> Result<SlaMetricDatum, RevocationDomainError>;
}
