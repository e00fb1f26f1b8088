use agentcore_governance::authorization::domain::{
    model::{
        entities::tool_classification_registry::ToolClassificationRegistry,
        enums::classification_tier::ClassificationTier,
    },
    services::classification_policy::validate_tool_authorization,
};

use crate::support::{approval_for, tool_registry};

#[test]
fn low_tier_tool_is_authorized() {
    let decision = validate_tool_authorization("get_product_info", None, &tool_registry());

    assert!(decision.authorized);
    assert!(decision.reason.contains("LOW"));
    assert_eq!(decision.tier, Some(ClassificationTier::Low));
}

#[test]
fn moderate_tier_tool_is_authorized() {
    let decision = validate_tool_authorization("web_search", None, &tool_registry());

    assert!(decision.authorized);
    assert!(decision.reason.contains("MODERATE"));
}

#[test]
fn sensitive_tool_without_approval_is_denied() {
    let decision = validate_tool_authorization("update_customer_record", None, &tool_registry());

    assert!(!decision.authorized);
    assert!(decision.reason.contains("SENSITIVE"));
    assert!(decision.reason.to_lowercase().contains("approval"));
}

#[test]
fn sensitive_tool_with_approval_is_authorized() {
    let approvals = approval_for("update_customer_record");

    let decision = validate_tool_authorization(
        "update_customer_record",
        approvals.get("update_customer_record"),
        &tool_registry(),
    );

    assert!(decision.authorized);
    assert!(decision.reason.contains("SENSITIVE"));
    assert!(decision.reason.to_lowercase().contains("approved"));
}

#[test]
fn unclassified_tool_is_denied() {
    let decision = validate_tool_authorization("delete_everything", None, &tool_registry());

    assert!(!decision.authorized);
    assert_eq!(decision.tier, None);
}

#[test]
fn registry_loads_from_json() {
    let registry = ToolClassificationRegistry::from_json_str(
        r#"{"tools": {
            "get_product_info": {"tier": "LOW", "description": "Catalog lookup"},
            "update_customer_record": {"tier": "SENSITIVE"}
        }}"#,
    )
    .expect("valid registry");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.classify("get_product_info"), Some(ClassificationTier::Low));
    assert_eq!(
        registry.classify("update_customer_record"),
        Some(ClassificationTier::Sensitive)
    );
    assert_eq!(registry.classify("web_search"), None);
}

#[test]
fn registry_rejects_unknown_tier() {
    let result = ToolClassificationRegistry::from_json_str(r#"{"tools": {"x": {"tier": "SECRET"}}}"#);

    assert!(result.is_err());
}
