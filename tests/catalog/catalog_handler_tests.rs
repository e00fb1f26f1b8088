use std::collections::HashSet;

use agentcore_governance::{
    catalog::{
        domain::model::enums::catalog_domain_error::CatalogDomainError,
        interfaces::handlers::resources::principal_catalog_page_resource::ListPrincipalsRequestResource,
    },
    shared::{
        domain::model::value_objects::correlation_context::CorrelationContext,
        infrastructure::persistence::repositories::audit_event_repository::AuditEventRepository,
    },
};

use crate::support::{
    create_catalog_harness, create_failing_catalog_harness, find_principal, list_request,
};

#[tokio::test]
async fn pages_split_the_inventory_without_overlap() {
    let harness = create_catalog_harness(100);

    let first = harness
        .handler
        .get_principals(list_request(1, 3))
        .await
        .expect("first page");
    let second = harness
        .handler
        .get_principals(list_request(2, 3))
        .await
        .expect("second page");

    assert!(first.success);
    assert_eq!(first.pagination.total_count, 6);
    assert_eq!(first.pagination.total_pages, 2);
    assert_eq!(first.pagination.page, 1);
    assert_eq!(first.pagination.page_size, 3);
    assert_eq!(first.principals.len(), 3);
    assert_eq!(second.principals.len(), 3);
    assert_eq!(second.pagination.page, 2);

    let arns = first
        .principals
        .iter()
        .chain(second.principals.iter())
        .map(|p| p.arn().to_string())
        .collect::<HashSet<_>>();
    assert_eq!(arns.len(), 6);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let harness = create_catalog_harness(100);

    let page = harness
        .handler
        .get_principals(list_request(3, 3))
        .await
        .expect("page expected");

    assert!(page.success);
    assert!(page.principals.is_empty());
    assert_eq!(page.pagination.total_pages, 2);
}

#[tokio::test]
async fn zero_page_size_is_rejected() {
    let harness = create_catalog_harness(100);

    let result = harness.handler.get_principals(list_request(1, 0)).await;

    assert!(matches!(result, Err(CatalogDomainError::InvalidRequest(_))));
}

#[tokio::test]
async fn orphans_report_unassigned_owner() {
    let harness = create_catalog_harness(2);

    let page = harness
        .handler
        .get_principals(list_request(1, 100))
        .await
        .expect("page expected");

    let orphan = find_principal(&page.principals, "orphan-test-role");
    assert_eq!(orphan.owner, "UNASSIGNED");
    assert!(orphan.is_orphan);

    let legacy = find_principal(&page.principals, "legacy-admin-role");
    assert_eq!(legacy.owner, "UNASSIGNED");

    let owned = find_principal(&page.principals, "customer-support-agent-dev");
    assert_eq!(owned.owner, "platform-team");
    assert!(!owned.is_orphan);
}

#[tokio::test]
async fn environment_filter_applies_before_paging() {
    let harness = create_catalog_harness(100);

    let page = harness
        .handler
        .get_principals(ListPrincipalsRequestResource {
            environments: Some(vec!["dev".to_string()]),
            ..list_request(1, 2)
        })
        .await
        .expect("page expected");

    assert_eq!(page.pagination.total_count, 3);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page
        .principals
        .iter()
        .all(|p| p.principal.environment() == Some("dev")));
}

#[tokio::test]
async fn owner_filter_matches_resolved_owner() {
    let harness = create_catalog_harness(100);

    let platform = harness
        .handler
        .get_principals(ListPrincipalsRequestResource {
            owner: Some("platform-team".to_string()),
            ..list_request(1, 100)
        })
        .await
        .expect("page expected");
    let unassigned = harness
        .handler
        .get_principals(ListPrincipalsRequestResource {
            owner: Some("UNASSIGNED".to_string()),
            ..list_request(1, 100)
        })
        .await
        .expect("page expected");

    assert_eq!(platform.pagination.total_count, 2);
    assert!(platform.principals.iter().all(|p| p.owner == "platform-team"));
    assert_eq!(unassigned.pagination.total_count, 2);
    assert!(unassigned.principals.iter().all(|p| p.is_orphan));
}

#[tokio::test]
async fn snapshot_summarizes_inventory_and_records_event() {
    let harness = create_catalog_harness(4);
    let context = CorrelationContext::anonymous();

    let snapshot = harness
        .handler
        .export_catalog_snapshot(&context)
        .await
        .expect("snapshot expected");

    assert_eq!(snapshot.total_principals, 6);
    assert_eq!(snapshot.principals.len(), 6);
    assert_eq!(snapshot.summary.orphan_count, 2);
    assert_eq!(snapshot.summary.inactive_count, 2);
    assert_eq!(snapshot.summary.risk_distribution.get("low"), Some(&2));
    assert_eq!(snapshot.summary.risk_distribution.get("moderate"), Some(&3));
    assert_eq!(snapshot.summary.risk_distribution.get("high"), Some(&1));

    let events = harness
        .audit_repository
        .list_events()
        .await
        .expect("events expected");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), "catalog_snapshot_exported");
    assert_eq!(events[0].correlation_id(), context.trace_id());
    assert!(events[0].verify_integrity());
}

#[tokio::test]
async fn handler_surfaces_source_failure() {
    let harness = create_failing_catalog_harness();

    let result = harness.handler.get_principals(list_request(1, 10)).await;

    assert!(matches!(result, Err(CatalogDomainError::PrincipalSource(_))));
    assert_eq!(harness.source.calls(), 1);
}
