use std::sync::Arc;

use validator::Validate;

use crate::{
    revocation::{
        domain::{
            model::{
                commands::create_revocation_request_command::{
                    CreateRevocationRequestCommand, CreateRevocationRequestCommandParts,
                },
                entities::{
                    revocation_record::RevocationRecord,
                    sla_metrics::{SlaMetricDatum, SlaMetrics},
                },
                enums::revocation_domain_error::RevocationDomainError,
                value_objects::revocation_id::RevocationId,
            },
            services::{
                revocation_command_service::RevocationCommandService,
                revocation_query_service::RevocationQueryService,
            },
        },
        interfaces::handlers::resources::{
            revocation_propagated_resource::RevocationPropagatedResource,
            revocation_request_resource::{RevocationCreatedResource, RevocationRequestResource},
        },
    },
    shared::domain::model::value_objects::correlation_context::CorrelationContext,
};

#[derive(Clone)]
pub struct RevocationHandler {
    command_service: Arc<dyn RevocationCommandService>,
    query_service: Arc<dyn RevocationQueryService>,
}

impl RevocationHandler {
    pub fn new(
        command_service: Arc<dyn RevocationCommandService>,
        query_service: Arc<dyn RevocationQueryService>,
    ) -> Self {
        Self {
            command_service,
            query_service,
        }
    }

    /// Rejects an incomplete payload before any record exists.
    pub async fn handle_revocation_request(
        &self,
        payload: RevocationRequestResource,
        context: &CorrelationContext,
    ) -> Result<RevocationCreatedResource, RevocationDomainError> {
        if let Err(validation_error) = payload.validate() {
            return Err(RevocationDomainError::InvalidRequest(
                validation_error.to_string(),
            ));
        }

        let command = CreateRevocationRequestCommand::new(CreateRevocationRequestCommandParts {
            subject_type: payload.subject_type,
            subject_id: payload.subject_id,
            scope: payload.scope,
            reason: payload.reason,
            initiated_by: payload.initiated_by,
        })?;

        let record = self
            .command_service
            .handle_create_revocation_request(command, context)
            .await?;

        Ok(RevocationCreatedResource {
            revocation_id: record.revocation_id.to_string(),
            correlation_id: context.trace_id().to_string(),
        })
    }

    pub async fn handle_revocation_propagate(
        &self,
        revocation_id: &str,
        context: &CorrelationContext,
    ) -> Result<RevocationPropagatedResource, RevocationDomainError> {
        let revocation_id = RevocationId::new(revocation_id.to_string())?;
        let record = self
            .command_service
            .handle_mark_revocation_propagated(&revocation_id, context)
            .await?;

        Ok(RevocationPropagatedResource {
            revocation_id: revocation_id.to_string(),
            propagation_latency_ms: record.propagation_latency_ms.unwrap_or_default(),
            sla_met: record.sla_met.unwrap_or(false),
            correlation_id: context.trace_id().to_string(),
        })
    }

    pub async fn check_subject_revoked(
        &self,
        subject_type: &str,
        subject_id: &str,
        attempted_action: &str,
        context: &CorrelationContext,
    ) -> Result<bool, RevocationDomainError> {
        self.query_service
            .handle_check_subject_access(subject_type, subject_id, attempted_action, context)
            .await
    }

    pub async fn get_revocation_status(
        &self,
        revocation_id: &str,
    ) -> Result<RevocationRecord, RevocationDomainError> {
        let revocation_id = RevocationId::new(revocation_id.to_string())?;
        self.query_service
            .handle_get_revocation_status(&revocation_id)
            .await
    }

    pub async fn compute_sla_metrics(&self) -> Result<SlaMetrics, RevocationDomainError> {
        self.query_service.handle_compute_sla_metrics().await
    }

    pub async fn emit_sla_metric(&self) -> Result<SlaMetricDatum, RevocationDomainError> {
        self.query_service.handle_emit_sla_metric().await
    }
}
