use agentcore_governance::{
    authorization::{
        domain::model::enums::permission_effect::PermissionEffect,
        interfaces::handlers::resources::update_agent_tools_resource::UpdateAgentToolsRequestResource,
    },
    shared::{
        domain::model::value_objects::correlation_context::CorrelationContext,
        infrastructure::persistence::repositories::audit_event_repository::AuditEventRepository,
    },
};

use crate::support::{
    approval_for, create_authorization_harness, create_authorization_harness_without_audit_sink,
    update_request, update_request_without_validation,
};

#[tokio::test]
async fn unknown_agent_reports_empty_tool_list() {
    let harness = create_authorization_harness();

    let response = harness
        .handler
        .get_agent_tools("warranty-agent")
        .await
        .expect("response expected");

    assert_eq!(response.agent_id, "warranty-agent");
    assert!(response.authorized_tools.is_empty());
    assert_eq!(response.total_count, 0);
}

#[tokio::test]
async fn validated_update_emits_one_event_per_tool() {
    let harness = create_authorization_harness();
    let context = CorrelationContext::anonymous();

    let response = harness
        .handler
        .update_agent_tools(
            update_request(
                "warranty-agent",
                &["get_product_info", "search_documentation"],
                "Initial setup for warranty agent",
            ),
            &context,
        )
        .await;

    assert!(response.success);
    assert_eq!(
        response.authorized_tools,
        Some(vec!["get_product_info".to_string(), "search_documentation".to_string()])
    );
    let changes = response.changes.expect("changes expected");
    assert_eq!(changes.added, vec!["get_product_info", "search_documentation"]);
    let events = response.audit_events.expect("events expected");
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event_type() == "authorization_decision"));
    assert!(events.iter().all(|e| e.field_str("effect") == Some("allow")));
    assert!(events.iter().all(|e| e.correlation_id() == context.trace_id()));

    let tools = harness
        .handler
        .get_agent_tools("warranty-agent")
        .await
        .expect("response expected");
    assert_eq!(tools.total_count, 2);
}

#[tokio::test]
async fn adding_moderate_tool_reports_only_the_addition() {
    let harness = create_authorization_harness();
    let context = CorrelationContext::anonymous();
    harness
        .handler
        .update_agent_tools(update_request("agent", &["get_product_info"], "setup"), &context)
        .await;

    let response = harness
        .handler
        .update_agent_tools(
            update_request("agent", &["get_product_info", "web_search"], "Adding web search"),
            &context,
        )
        .await;

    assert!(response.success);
    let changes = response.changes.expect("changes expected");
    assert_eq!(changes.added, vec!["web_search"]);
    assert_eq!(changes.unchanged, vec!["get_product_info"]);
}

#[tokio::test]
async fn sensitive_tool_without_approval_refuses_whole_update() {
    let harness = create_authorization_harness();
    let context = CorrelationContext::anonymous();
    harness
        .handler
        .update_agent_tools(update_request("agent", &["get_product_info"], "setup"), &context)
        .await;
    let events_before = harness
        .audit_repository
        .list_events()
        .await
        .expect("events expected")
        .len();

    let response = harness
        .handler
        .update_agent_tools(
            update_request(
                "agent",
                &["web_search", "update_customer_record"],
                "Adding customer record updates",
            ),
            &context,
        )
        .await;

    assert!(!response.success);
    let error = response.error.expect("error expected");
    assert!(error.contains("update_customer_record"));
    assert!(error.contains("SENSITIVE"));
    assert!(error.to_lowercase().contains("approval"));
    assert!(response.authorized_tools.is_none());

    let tools = harness
        .handler
        .get_agent_tools("agent")
        .await
        .expect("response expected");
    assert_eq!(tools.authorized_tools, vec!["get_product_info"]);
    let events_after = harness
        .audit_repository
        .list_events()
        .await
        .expect("events expected")
        .len();
    assert_eq!(events_before, events_after);
}

#[tokio::test]
async fn sensitive_tool_with_approval_is_granted() {
    let harness = create_authorization_harness();

    let response = harness
        .handler
        .update_agent_tools(
            UpdateAgentToolsRequestResource {
                approval_records: approval_for("update_customer_record"),
                ..update_request(
                    "tier-2-agent",
                    &["get_product_info", "update_customer_record"],
                    "Tier-2 agent with customer record access",
                )
            },
            &CorrelationContext::anonymous(),
        )
        .await;

    assert!(response.success);
    let events = response.audit_events.expect("events expected");
    assert_eq!(events.len(), 2);
    let sensitive = events
        .iter()
        .find(|e| e.field_str("tool_id") == Some("update_customer_record"))
        .expect("sensitive event");
    assert_eq!(sensitive.field_str("effect"), Some("allow"));
    assert_eq!(sensitive.field_str("classification"), Some("SENSITIVE"));
    assert_eq!(
        sensitive.field_str("approved_by"),
        Some("security-lead@example.com")
    );
}

#[tokio::test]
async fn unclassified_tool_is_refused_when_validating() {
    let harness = create_authorization_harness();

    let response = harness
        .handler
        .update_agent_tools(
            update_request("agent", &["shell_exec"], "try it"),
            &CorrelationContext::anonymous(),
        )
        .await;

    assert!(!response.success);
    assert!(response.error.expect("error expected").contains("shell_exec"));
}

#[tokio::test]
async fn unvalidated_update_skips_classification() {
    let harness = create_authorization_harness();

    let response = harness
        .handler
        .update_agent_tools(
            update_request_without_validation("agent", &["tool1", "tool2"], "bulk import"),
            &CorrelationContext::anonymous(),
        )
        .await;

    assert!(response.success);
    let events = response.audit_events.expect("events expected");
    assert!(events.iter().all(|e| e.field_str("reason") == Some("bulk import")));
}

#[tokio::test]
async fn blank_agent_id_comes_back_in_envelope() {
    let harness = create_authorization_harness();

    let response = harness
        .handler
        .update_agent_tools(
            update_request("", &["get_product_info"], "setup"),
            &CorrelationContext::anonymous(),
        )
        .await;

    assert!(!response.success);
    assert!(response.error.is_some());
}

#[tokio::test]
async fn check_tool_access_allows_authorized_and_denies_others() {
    let harness = create_authorization_harness();
    harness
        .handler
        .update_agent_tools(
            update_request("agent", &["get_product_info"], "Test setup"),
            &CorrelationContext::anonymous(),
        )
        .await;

    let allowed = harness
        .handler
        .check_tool_access("agent", "get_product_info", "corr-allow")
        .await
        .expect("decision expected");
    let denied = harness
        .handler
        .check_tool_access("agent", "web_search", "corr-deny")
        .await
        .expect("decision expected");

    assert_eq!(allowed.agent_id, "agent");
    assert_eq!(allowed.tool_id, "get_product_info");
    assert_eq!(allowed.effect, PermissionEffect::Allow);
    assert!(allowed.authorized);
    assert_eq!(allowed.audit_event.event_type(), "authorization_decision");
    assert_eq!(allowed.audit_event.correlation_id(), "corr-allow");
    assert_eq!(allowed.audit_event.field_str("classification"), Some("LOW"));

    assert_eq!(denied.effect, PermissionEffect::Deny);
    assert!(!denied.authorized);
    assert!(denied.reason.contains("NOT in authorized list"));
    assert_eq!(denied.audit_event.field_str("effect"), Some("deny"));
    assert_eq!(denied.audit_event.correlation_id(), "corr-deny");
}

#[tokio::test]
async fn blank_correlation_id_starts_fresh_trace() {
    let harness = create_authorization_harness();

    let first = harness
        .handler
        .check_tool_access("agent", "web_search", "")
        .await
        .expect("decision expected");
    let second = harness
        .handler
        .check_tool_access("agent", "web_search", "   ")
        .await
        .expect("decision expected");

    for decision in [&first, &second] {
        let correlation_id = decision.audit_event.correlation_id();
        assert_eq!(correlation_id.len(), 32);
        assert!(correlation_id.chars().all(|c| c.is_ascii_hexdigit()));
    }
    assert_ne!(
        first.audit_event.correlation_id(),
        second.audit_event.correlation_id()
    );
}

#[tokio::test]
async fn removing_a_tool_makes_next_check_deny() {
    let harness = create_authorization_harness();
    let context = CorrelationContext::anonymous();
    harness
        .handler
        .update_agent_tools(
            update_request("agent", &["get_product_info", "check_warranty"], "setup"),
            &context,
        )
        .await;
    let before = harness
        .handler
        .check_tool_access("agent", "check_warranty", "corr-1")
        .await
        .expect("decision expected");

    let response = harness
        .handler
        .update_agent_tools(update_request("agent", &["get_product_info"], "revoke warranty"), &context)
        .await;
    let after = harness
        .handler
        .check_tool_access("agent", "check_warranty", "corr-2")
        .await
        .expect("decision expected");

    assert!(before.authorized);
    assert_eq!(
        response.changes.expect("changes expected").removed,
        vec!["check_warranty"]
    );
    assert!(!after.authorized);
}

#[tokio::test]
async fn every_access_check_is_recorded() {
    let harness = create_authorization_harness();

    for tool in ["get_product_info", "web_search", "unknown_tool"] {
        harness
            .handler
            .check_tool_access("idle-agent", tool, "corr-audit")
            .await
            .expect("decision expected");
    }

    let events = harness
        .audit_repository
        .find_by_correlation_id("corr-audit")
        .await
        .expect("events expected");
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.field_str("effect") == Some("deny")));
    assert!(events.iter().all(|e| e.verify_integrity()));
}

#[tokio::test]
async fn audit_sink_failure_does_not_block_decisions() {
    let harness = create_authorization_harness_without_audit_sink();
    let context = CorrelationContext::anonymous();

    let response = harness
        .handler
        .update_agent_tools(update_request("agent", &["get_product_info"], "setup"), &context)
        .await;
    let decision = harness
        .handler
        .check_tool_access("agent", "get_product_info", "corr-down")
        .await
        .expect("decision expected");

    assert!(response.success);
    assert_eq!(response.audit_events.map(|events| events.len()), Some(1));
    assert!(decision.authorized);
    assert!(decision.audit_event.verify_integrity());
    assert_eq!(harness.audit_repository.attempts(), 2);
}
