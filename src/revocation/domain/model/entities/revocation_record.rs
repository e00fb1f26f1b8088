use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::revocation::domain::model::{
    commands::create_revocation_request_command::CreateRevocationRequestCommand,
    enums::{revocation_domain_error::RevocationDomainError, revocation_status::RevocationStatus},
    value_objects::{revocation_id::RevocationId, revocation_subject::RevocationSubject},
};

/// A revocation request and its propagation outcome. `propagated_at`,
/// `propagation_latency_ms` and `sla_met` stay unset while pending and are
/// written exactly once.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevocationRecord {
    pub revocation_id: RevocationId,
    pub subject_type: String,
    pub subject_id: String,
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiated_by: Option<String>,
    pub status: RevocationStatus,
    pub requested_at: DateTime<Utc>,
    pub propagated_at: Option<DateTime<Utc>>,
    pub propagation_latency_ms: Option<u64>,
    pub sla_met: Option<bool>,
}

impl RevocationRecord {
    pub fn new_pending(command: &CreateRevocationRequestCommand, requested_at: DateTime<Utc>) -> Self {
        Self {
            revocation_id: RevocationId::generate(),
            subject_type: command.subject().subject_type().to_string(),
            subject_id: command.subject().subject_id().to_string(),
            scope: command.scope().to_string(),
            reason: command.reason().map(str::to_string),
            initiated_by: command.initiated_by().map(str::to_string),
            status: RevocationStatus::Pending,
            requested_at,
            propagated_at: None,
            propagation_latency_ms: None,
            sla_met: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RevocationStatus::Pending
    }

    pub fn applies_to(&self, subject: &RevocationSubject) -> bool {
        self.subject_type == subject.subject_type() && self.subject_id == subject.subject_id()
    }

    /// PENDING to PROPAGATED. A second call is rejected and leaves the record
    /// untouched.
    pub fn mark_propagated(
        &mut self,
        now: DateTime<Utc>,
        sla_target: Duration,
    ) -> Result<(), RevocationDomainError> {
        if !self.is_pending() {
            return Err(RevocationDomainError::AlreadyPropagated(
                self.revocation_id.to_string(),
            ));
        }

        let latency_ms = u64::try_from((now - self.requested_at).num_milliseconds()).unwrap_or(0);
        let target_ms = u64::try_from(sla_target.as_millis()).unwrap_or(u64::MAX);

        self.status = RevocationStatus::Propagated;
        self.propagated_at = Some(now);
        self.propagation_latency_ms = Some(latency_ms);
        self.sla_met = Some(latency_ms <= target_ms);
        Ok(())
    }
}
