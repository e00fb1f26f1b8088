use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    revocation::{
        domain::{
            model::{
                commands::create_revocation_request_command::CreateRevocationRequestCommand,
                entities::revocation_record::RevocationRecord,
                enums::revocation_domain_error::RevocationDomainError,
                value_objects::revocation_id::RevocationId,
            },
            services::revocation_command_service::RevocationCommandService,
        },
        infrastructure::persistence::repositories::revocation_repository::RevocationRepository,
    },
    shared::{
        domain::{
            model::{
                events::audit_event::AuditEvent,
                value_objects::correlation_context::CorrelationContext,
            },
            services::evidence_constructor::{EvidenceConstructor, RevocationRequestEvidence},
        },
        infrastructure::{
            clock::Clock,
            persistence::repositories::audit_event_repository::AuditEventRepository,
        },
    },
};

pub const DEFAULT_SLA_TARGET: Duration = Duration::from_secs(300);

pub struct RevocationCommandServiceImpl {
    revocation_repository: Arc<dyn RevocationRepository>,
    audit_repository: Arc<dyn AuditEventRepository>,
    evidence: EvidenceConstructor,
    clock: Arc<dyn Clock>,
    sla_target: Duration,
    propagation_lock: Mutex<()>,
}

impl RevocationCommandServiceImpl {
    pub fn new(
        revocation_repository: Arc<dyn RevocationRepository>,
        audit_repository: Arc<dyn AuditEventRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::new_with_sla_target(
            revocation_repository,
            audit_repository,
            clock,
            DEFAULT_SLA_TARGET,
        )
    }

    pub fn new_with_sla_target(
        revocation_repository: Arc<dyn RevocationRepository>,
        audit_repository: Arc<dyn AuditEventRepository>,
        clock: Arc<dyn Clock>,
        sla_target: Duration,
    ) -> Self {
        Self {
            revocation_repository,
            audit_repository,
            evidence: EvidenceConstructor::new(clock.clone()),
            clock,
            sla_target,
            propagation_lock: Mutex::new(()),
        }
    }

    async fn record(&self, event: &AuditEvent) {
        if let Err(error) = self.audit_repository.save_event(event).await {
            warn!(correlation_id = %event.correlation_id(), %error, "failed to record revocation event");
        }
    }
}

#[async_trait]
impl RevocationCommandService for RevocationCommandServiceImpl {
    async fn handle_create_revocation_request(
        &self,
        command: CreateRevocationRequestCommand,
        context: &CorrelationContext,
    ) -> Result<RevocationRecord, RevocationDomainError> {
        let record = RevocationRecord::new_pending(&command, self.clock.now());
        self.revocation_repository.save(&record).await?;

        let event = self.evidence.construct_revocation_request_event(
            context,
            RevocationRequestEvidence {
                revocation_id: record.revocation_id.value(),
                subject_type: &record.subject_type,
                subject_id: &record.subject_id,
                scope: &record.scope,
                reason: record.reason.as_deref(),
                initiated_by: record.initiated_by.as_deref(),
            },
        );
        self.record(&event).await;

        info!(
            revocation_id = %record.revocation_id,
            subject_type = %record.subject_type,
            subject_id = %record.subject_id,
            scope = %record.scope,
            correlation_id = %context.trace_id(),
            "revocation requested"
        );

        Ok(record)
    }

    async fn handle_mark_revocation_propagated(
        &self,
        revocation_id: &RevocationId,
        context: &CorrelationContext,
    ) -> Result<RevocationRecord, RevocationDomainError> {
        let _guard = self.propagation_lock.lock().await;

        let mut record = self
            .revocation_repository
            .find_by_id(revocation_id)
            .await?
            .ok_or_else(|| RevocationDomainError::RevocationNotFound(revocation_id.to_string()))?;

        record.mark_propagated(self.clock.now(), self.sla_target)?;
        self.revocation_repository.update(&record).await?;

        let latency_ms = record.propagation_latency_ms.unwrap_or_default();
        let sla_met = record.sla_met.unwrap_or(false);

        let event = self.evidence.construct_revocation_propagated_event(
            context,
            revocation_id.value(),
            latency_ms,
            sla_met,
        );
        self.record(&event).await;

        if sla_met {
            info!(
                revocation_id = %revocation_id,
                latency_ms,
                status = record.status.as_str(),
                correlation_id = %context.trace_id(),
                "revocation propagated"
            );
        } else {
            warn!(
                revocation_id = %revocation_id,
                latency_ms,
                sla_target_ms = self.sla_target.as_millis() as u64,
                correlation_id = %context.trace_id(),
                "revocation propagated after SLA target"
            );
        }

        Ok(record)
    }

    #[cfg(any(test, feature = "test-support"))]
    async fn reset(&self) -> Result<(), RevocationDomainError> {
        self.revocation_repository.clear().await
    }
}
