use std::{path::Path, sync::Arc};

use agentcore_governance::{
    authorization::{
        build_authorization_handler,
        domain::model::entities::tool_classification_registry::ToolClassificationRegistry,
        infrastructure::persistence::repositories::in_memory::in_memory_authorization_repository::InMemoryAuthorizationRepository,
    },
    catalog::{
        build_catalog_handler,
        infrastructure::identity_source::static_principal_source::StaticPrincipalSource,
    },
    config::app_config::AppConfig,
    revocation::{
        build_revocation_handler,
        infrastructure::persistence::repositories::in_memory::in_memory_revocation_repository::InMemoryRevocationRepository,
    },
    shared::{
        domain::model::value_objects::correlation_context::CorrelationContext,
        infrastructure::{
            clock::SystemClock,
            persistence::repositories::{
                audit_event_repository::AuditEventRepository,
                in_memory::in_memory_audit_event_repository::InMemoryAuditEventRepository,
            },
        },
    },
    synthetic::build_synthetic_revocation_probe,
};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let clock = Arc::new(SystemClock);
    let audit_repository = Arc::new(InMemoryAuditEventRepository::new());

    let registry = match &config.tool_registry_path {
        Some(path) => ToolClassificationRegistry::from_json_file(path)?,
        None => ToolClassificationRegistry::new(),
    };
    let authorization_handler = build_authorization_handler(
        Arc::new(InMemoryAuthorizationRepository::new()),
        audit_repository.clone(),
        Arc::new(registry),
        clock.clone(),
    );
    let registered_tools = authorization_handler.registered_tool_count();

    let revocation_handler = build_revocation_handler(
        &config,
        Arc::new(InMemoryRevocationRepository::new()),
        audit_repository.clone(),
        clock.clone(),
    );

    info!(
        environment = %config.environment,
        sla_target_seconds = config.revocation_sla_target_seconds,
        registered_tools,
        "governance probe starting"
    );

    let probe = build_synthetic_revocation_probe(&config, revocation_handler.clone());
    let summary = probe.run_multiple_tests(config.synthetic_test_count).await;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let metric = revocation_handler.emit_sla_metric().await?;
    println!("{}", serde_json::to_string_pretty(&metric)?);

    if let Some(path) = &config.principal_inventory_path {
        let source = StaticPrincipalSource::from_json_file(
            Path::new(path),
            config.catalog_source_page_size,
        )?;
        let catalog_handler = build_catalog_handler(
            &config,
            Arc::new(source),
            audit_repository.clone(),
            clock.clone(),
        );

        let context = CorrelationContext::anonymous().with_user("governance-probe");
        let snapshot = catalog_handler.export_catalog_snapshot(&context).await?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    let events = audit_repository.list_events().await?;
    let tampered = events.iter().filter(|event| !event.verify_integrity()).count();
    info!(events = events.len(), tampered, "governance probe finished");

    if summary.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
