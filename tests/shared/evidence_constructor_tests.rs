use agentcore_governance::shared::domain::{
    model::{
        enums::evidence_error::EvidenceError, events::audit_event::AuditEvent,
        value_objects::correlation_context::CorrelationContext,
    },
    services::evidence_constructor::{
        AuthorizationDecisionEvidence, REVOCATION_REQUESTED_EVENT, RevocationRequestEvidence,
    },
};
use chrono::Duration;
use serde_json::{Map, Value, json};

use crate::support::{create_evidence_harness, revocation_request_evidence};

fn is_sha256_hex(value: &str) -> bool {
    value.len() == 64 && value.chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn identical_inputs_produce_identical_hashes() {
    let harness = create_evidence_harness();
    let context = CorrelationContext::from_trace_id("trace-1");

    let first = harness
        .evidence
        .construct_revocation_request_event(&context, revocation_request_evidence());
    let second = harness
        .evidence
        .construct_revocation_request_event(&context, revocation_request_evidence());

    assert_eq!(first.integrity_hash(), second.integrity_hash());
    assert!(is_sha256_hex(first.integrity_hash()));
}

#[test]
fn any_changed_field_changes_the_hash() {
    let harness = create_evidence_harness();
    let context = CorrelationContext::from_trace_id("trace-1");
    let baseline = harness
        .evidence
        .construct_revocation_request_event(&context, revocation_request_evidence());

    let other_subject = harness.evidence.construct_revocation_request_event(
        &context,
        RevocationRequestEvidence {
            subject_id: "user-456",
            ..revocation_request_evidence()
        },
    );
    let other_context = harness.evidence.construct_revocation_request_event(
        &CorrelationContext::from_trace_id("trace-2"),
        revocation_request_evidence(),
    );
    harness.clock.advance(Duration::milliseconds(1));
    let later = harness
        .evidence
        .construct_revocation_request_event(&context, revocation_request_evidence());

    assert_ne!(baseline.integrity_hash(), other_subject.integrity_hash());
    assert_ne!(baseline.integrity_hash(), other_context.integrity_hash());
    assert_ne!(baseline.integrity_hash(), later.integrity_hash());
}

#[test]
fn optional_request_fields_take_defaults() {
    let harness = create_evidence_harness();
    let context = CorrelationContext::anonymous();

    let event = harness
        .evidence
        .construct_revocation_request_event(&context, revocation_request_evidence());

    assert_eq!(event.event_type(), REVOCATION_REQUESTED_EVENT);
    assert_eq!(event.field_str("reason"), Some(""));
    assert_eq!(event.field_str("initiated_by"), Some("unknown"));
    assert_eq!(event.correlation_id(), context.trace_id());
    assert!(event.timestamp().ends_with('Z'));
}

#[test]
fn access_denied_event_keeps_null_revocation_id() {
    let harness = create_evidence_harness();

    let event = harness.evidence.construct_revocation_access_denied_event(
        &CorrelationContext::anonymous(),
        "user",
        "user-123",
        "read_customer",
        None,
    );

    assert_eq!(event.field("revocation_id"), Some(&Value::Null));
    assert_eq!(event.field_str("attempted_action"), Some("read_customer"));
}

#[test]
fn authorization_decision_carries_effect_and_classification() {
    let harness = create_evidence_harness();

    let event = harness.evidence.construct_authorization_decision_event(
        &CorrelationContext::anonymous(),
        AuthorizationDecisionEvidence {
            agent_id: "warranty-agent",
            tool_id: "update_customer_record",
            effect: "allow",
            reason: "approved",
            classification: Some("SENSITIVE"),
            approved_by: Some("security-lead"),
        },
    );

    assert_eq!(event.event_type(), "authorization_decision");
    assert_eq!(event.field_str("effect"), Some("allow"));
    assert_eq!(event.field_str("classification"), Some("SENSITIVE"));
    assert!(event.verify_integrity());
}

#[test]
fn edited_event_fails_integrity_verification() {
    let harness = create_evidence_harness();
    let event = harness
        .evidence
        .construct_revocation_request_event(&CorrelationContext::anonymous(), revocation_request_evidence());

    let mut raw = serde_json::to_value(&event).expect("serializable event");
    raw["subject_id"] = json!("someone-else");
    let edited: AuditEvent = serde_json::from_value(raw).expect("deserializable event");

    assert!(event.verify_integrity());
    assert!(!edited.verify_integrity());
}

#[test]
fn canonical_body_sorts_keys_without_whitespace() {
    let mut fields = Map::new();
    fields.insert("zeta".to_string(), json!(1));
    fields.insert("alpha".to_string(), json!({"b": 2, "a": 1}));

    let event = AuditEvent::seal("custom", fields, "trace", "2025-01-01T00:00:00Z")
        .expect("no reserved fields");

    assert_eq!(
        event.canonical_body(),
        r#"{"alpha":{"a":1,"b":2},"correlation_id":"trace","event_type":"custom","timestamp":"2025-01-01T00:00:00Z","zeta":1}"#
    );
}

#[test]
fn sealing_rejects_reserved_field_names() {
    let mut fields = Map::new();
    fields.insert("integrity_hash".to_string(), json!("forged"));

    let result = AuditEvent::seal("custom", fields, "trace", "2025-01-01T00:00:00Z");

    assert!(matches!(result, Err(EvidenceError::ReservedField(name)) if name == "integrity_hash"));
}
