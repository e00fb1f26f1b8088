use std::collections::HashSet;

use agentcore_governance::shared::domain::model::value_objects::correlation_context::{
    CORRELATION_HEADER, CorrelationContext,
};

#[test]
fn trace_ids_are_unique_across_many_contexts() {
    let ids = (0..1000)
        .map(|_| CorrelationContext::anonymous().trace_id().to_string())
        .collect::<HashSet<_>>();

    assert_eq!(ids.len(), 1000);
}

#[test]
fn trace_id_is_32_lowercase_hex_characters() {
    let context = CorrelationContext::anonymous();

    assert_eq!(context.trace_id().len(), 32);
    assert!(context
        .trace_id()
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn annotations_are_kept_on_the_context() {
    let context = CorrelationContext::new(
        Some("alice".to_string()),
        Some("customer-support".to_string()),
        Some("get_product_info".to_string()),
    );

    assert_eq!(context.user(), Some("alice"));
    assert_eq!(context.agent(), Some("customer-support"));
    assert_eq!(context.tool(), Some("get_product_info"));
}

#[test]
fn headers_carry_trace_and_present_annotations_only() {
    let context = CorrelationContext::from_trace_id("abc123")
        .with_user("alice")
        .with_tool("web_search");

    let headers = context.to_headers();

    assert_eq!(
        headers.get(CORRELATION_HEADER).map(String::as_str),
        Some("trace=abc123;user=alice;tool=web_search")
    );
}

#[test]
fn adopted_trace_id_is_used_verbatim() {
    let context = CorrelationContext::from_trace_id("external-trace-7");

    assert_eq!(context.trace_id(), "external-trace-7");
    assert_eq!(context.user(), None);
}
