use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    revocation::{
        domain::{
            model::{
                entities::{
                    revocation_record::RevocationRecord,
                    sla_metrics::{
                        SLA_METRIC_NAME, SLA_METRIC_NAMESPACE, SLA_METRIC_UNIT, SlaMetricDatum,
                        SlaMetrics,
                    },
                },
                enums::revocation_domain_error::RevocationDomainError,
                value_objects::{
                    revocation_id::RevocationId, revocation_subject::RevocationSubject,
                },
            },
            services::revocation_query_service::RevocationQueryService,
        },
        infrastructure::persistence::repositories::revocation_repository::RevocationRepository,
    },
    shared::{
        domain::{
            model::value_objects::correlation_context::CorrelationContext,
            services::evidence_constructor::EvidenceConstructor,
        },
        infrastructure::{
            clock::Clock,
            persistence::repositories::audit_event_repository::AuditEventRepository,
        },
    },
};

pub struct RevocationQueryServiceImpl {
    revocation_repository: Arc<dyn RevocationRepository>,
    audit_repository: Arc<dyn AuditEventRepository>,
    evidence: EvidenceConstructor,
    clock: Arc<dyn Clock>,
    environment: String,
}

impl RevocationQueryServiceImpl {
    pub fn new(
        revocation_repository: Arc<dyn RevocationRepository>,
        audit_repository: Arc<dyn AuditEventRepository>,
        clock: Arc<dyn Clock>,
        environment: String,
    ) -> Self {
        Self {
            revocation_repository,
            audit_repository,
            evidence: EvidenceConstructor::new(clock.clone()),
            clock,
            environment,
        }
    }
}

#[async_trait]
impl RevocationQueryService for RevocationQueryServiceImpl {
    async fn handle_get_revocation_status(
        &self,
        revocation_id: &RevocationId,
    ) -> Result<RevocationRecord, RevocationDomainError> {
        self.revocation_repository
            .find_by_id(revocation_id)
            .await?
            .ok_or_else(|| RevocationDomainError::RevocationNotFound(revocation_id.to_string()))
    }

    async fn handle_is_subject_revoked(
        &self,
        subject_type: &str,
        subject_id: &str,
    ) -> Result<bool, RevocationDomainError> {
        let subject = RevocationSubject::new(subject_type.to_string(), subject_id.to_string())?;

        Ok(!self
            .revocation_repository
            .find_by_subject(&subject)
            .await?
            .is_empty())
    }

    async fn handle_check_subject_access(
        &self,
        subject_type: &str,
        subject_id: &str,
        attempted_action: &str,
        context: &CorrelationContext,
    ) -> Result<bool, RevocationDomainError> {
        let subject = RevocationSubject::new(subject_type.to_string(), subject_id.to_string())?;
        let records = self.revocation_repository.find_by_subject(&subject).await?;
        let Some(latest) = records.last() else {
            return Ok(false);
        };

        let event = self.evidence.construct_revocation_access_denied_event(
            context,
            subject.subject_type(),
            subject.subject_id(),
            attempted_action,
            Some(latest.revocation_id.value()),
        );
        if let Err(error) = self.audit_repository.save_event(&event).await {
            warn!(correlation_id = %context.trace_id(), %error, "failed to record access denied event");
        }

        info!(
            subject_type = subject.subject_type(),
            subject_id = subject.subject_id(),
            attempted_action,
            revocation_id = %latest.revocation_id,
            correlation_id = %context.trace_id(),
            "access denied for revoked subject"
        );

        Ok(true)
    }

    async fn handle_list_revocations(&self) -> Result<Vec<RevocationRecord>, RevocationDomainError> {
        self.revocation_repository.list().await
    }

    async fn handle_compute_sla_metrics(&self) -> Result<SlaMetrics, RevocationDomainError> {
        let records = self.revocation_repository.list().await?;
        Ok(SlaMetrics::from_records(&records))
    }

    async fn handle_emit_sla_metric(&self) -> Result<SlaMetricDatum, RevocationDomainError> {
        let metrics = self.handle_compute_sla_metrics().await?;

        let mut dimensions = BTreeMap::new();
        dimensions.insert("Environment".to_string(), self.environment.clone());

        let datum = SlaMetricDatum {
            metric_name: SLA_METRIC_NAME.to_string(),
            namespace: SLA_METRIC_NAMESPACE.to_string(),
            dimensions,
            value: metrics.sla_compliance_rate,
            unit: SLA_METRIC_UNIT.to_string(),
            timestamp: self.clock.now(),
        };

        info!(
            metric_name = %datum.metric_name,
            namespace = %datum.namespace,
            environment = %self.environment,
            value = datum.value,
            total_revocations = metrics.total_revocations,
            "SLA metric emitted"
        );

        Ok(datum)
    }
}
