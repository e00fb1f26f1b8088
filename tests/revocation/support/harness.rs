use std::{sync::Arc, time::Duration};

use agentcore_governance::{
    config::app_config::AppConfig,
    revocation::{
        application::{
            command_services::revocation_command_service_impl::RevocationCommandServiceImpl,
            query_services::revocation_query_service_impl::RevocationQueryServiceImpl,
        },
        infrastructure::persistence::repositories::in_memory::in_memory_revocation_repository::InMemoryRevocationRepository,
        interfaces::handlers::revocation_handler::RevocationHandler,
    },
    shared::infrastructure::persistence::repositories::in_memory::in_memory_audit_event_repository::InMemoryAuditEventRepository,
};
use chrono::{TimeZone, Utc};

use super::fakes::FakeClock;

pub struct RevocationHarness {
    pub clock: Arc<FakeClock>,
    pub audit_repository: Arc<InMemoryAuditEventRepository>,
    pub command_service: Arc<RevocationCommandServiceImpl>,
    pub query_service: Arc<RevocationQueryServiceImpl>,
    pub handler: RevocationHandler,
}

pub fn create_revocation_harness() -> RevocationHarness {
    create_revocation_harness_with_sla_target(AppConfig::default().sla_target())
}

pub fn create_revocation_harness_with_sla_target(sla_target: Duration) -> RevocationHarness {
    let repository = Arc::new(InMemoryRevocationRepository::new());
    let audit_repository = Arc::new(InMemoryAuditEventRepository::new());
    let clock = Arc::new(FakeClock::new(
        Utc.with_ymd_and_hms(2025, 11, 15, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    ));

    let command_service = Arc::new(RevocationCommandServiceImpl::new_with_sla_target(
        repository.clone(),
        audit_repository.clone(),
        clock.clone(),
        sla_target,
    ));
    let query_service = Arc::new(RevocationQueryServiceImpl::new(
        repository,
        audit_repository.clone(),
        clock.clone(),
        "test".to_string(),
    ));
    let handler = RevocationHandler::new(command_service.clone(), query_service.clone());

    RevocationHarness {
        clock,
        audit_repository,
        command_service,
        query_service,
        handler,
    }
}
