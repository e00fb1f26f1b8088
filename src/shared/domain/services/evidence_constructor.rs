use std::{collections::BTreeMap, sync::Arc};

use chrono::SecondsFormat;
use serde_json::{Map, Value, json};

use crate::shared::{
    domain::model::{
        events::audit_event::AuditEvent, value_objects::correlation_context::CorrelationContext,
    },
    infrastructure::clock::Clock,
};

pub const REVOCATION_REQUESTED_EVENT: &str = "revocation_requested";
pub const REVOCATION_PROPAGATED_EVENT: &str = "revocation_propagated";
pub const REVOCATION_ACCESS_DENIED_EVENT: &str = "revocation_access_denied";
pub const AUTHORIZATION_DECISION_EVENT: &str = "authorization_decision";
pub const CATALOG_SNAPSHOT_EXPORTED_EVENT: &str = "catalog_snapshot_exported";

pub const DEFAULT_INITIATED_BY: &str = "unknown";

pub struct RevocationRequestEvidence<'a> {
    pub revocation_id: &'a str,
    pub subject_type: &'a str,
    pub subject_id: &'a str,
    pub scope: &'a str,
    pub reason: Option<&'a str>,
    pub initiated_by: Option<&'a str>,
}

pub struct AuthorizationDecisionEvidence<'a> {
    pub agent_id: &'a str,
    pub tool_id: &'a str,
    pub effect: &'a str,
    pub reason: &'a str,
    pub classification: Option<&'a str>,
    pub approved_by: Option<&'a str>,
}

pub struct CatalogSnapshotEvidence<'a> {
    pub total_principals: usize,
    pub orphan_count: usize,
    pub inactive_count: usize,
    pub risk_distribution: &'a BTreeMap<String, usize>,
}

/// Builds one sealed audit event per governance action, stamped with the
/// clock's current time and the caller's correlation context.
#[derive(Clone)]
pub struct EvidenceConstructor {
    clock: Arc<dyn Clock>,
}

impl EvidenceConstructor {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn construct_revocation_request_event(
        &self,
        context: &CorrelationContext,
        evidence: RevocationRequestEvidence<'_>,
    ) -> AuditEvent {
        self.seal(
            REVOCATION_REQUESTED_EVENT,
            context,
            json!({
                "revocation_id": evidence.revocation_id,
                "subject_type": evidence.subject_type,
                "subject_id": evidence.subject_id,
                "scope": evidence.scope,
                "reason": evidence.reason.unwrap_or_default(),
                "initiated_by": evidence.initiated_by.unwrap_or(DEFAULT_INITIATED_BY),
            }),
        )
    }

    pub fn construct_revocation_propagated_event(
        &self,
        context: &CorrelationContext,
        revocation_id: &str,
        propagation_latency_ms: u64,
        sla_met: bool,
    ) -> AuditEvent {
        self.seal(
            REVOCATION_PROPAGATED_EVENT,
            context,
            json!({
                "revocation_id": revocation_id,
                "propagation_latency_ms": propagation_latency_ms,
                "sla_met": sla_met,
            }),
        )
    }

    pub fn construct_revocation_access_denied_event(
        &self,
        context: &CorrelationContext,
        subject_type: &str,
        subject_id: &str,
        attempted_action: &str,
        revocation_id: Option<&str>,
    ) -> AuditEvent {
        self.seal(
            REVOCATION_ACCESS_DENIED_EVENT,
            context,
            json!({
                "subject_type": subject_type,
                "subject_id": subject_id,
                "attempted_action": attempted_action,
                "revocation_id": revocation_id,
            }),
        )
    }

    pub fn construct_authorization_decision_event(
        &self,
        context: &CorrelationContext,
        evidence: AuthorizationDecisionEvidence<'_>,
    ) -> AuditEvent {
        self.seal(
            AUTHORIZATION_DECISION_EVENT,
            context,
            json!({
                "agent_id": evidence.agent_id,
                "tool_id": evidence.tool_id,
                "effect": evidence.effect,
                "reason": evidence.reason,
                "classification": evidence.classification,
                "approved_by": evidence.approved_by,
            }),
        )
    }

    pub fn construct_catalog_snapshot_event(
        &self,
        context: &CorrelationContext,
        evidence: CatalogSnapshotEvidence<'_>,
    ) -> AuditEvent {
        self.seal(
            CATALOG_SNAPSHOT_EXPORTED_EVENT,
            context,
            json!({
                "total_principals": evidence.total_principals,
                "orphan_count": evidence.orphan_count,
                "inactive_count": evidence.inactive_count,
                "risk_distribution": evidence.risk_distribution,
            }),
        )
    }

    fn seal(&self, event_type: &str, context: &CorrelationContext, fields: Value) -> AuditEvent {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        AuditEvent::assemble(
            event_type.to_string(),
            fields,
            context.trace_id().to_string(),
            self.clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        )
    }
}
