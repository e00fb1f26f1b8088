use std::sync::Arc;

use crate::{
    config::app_config::AppConfig,
    revocation::{
        application::{
            command_services::revocation_command_service_impl::RevocationCommandServiceImpl,
            query_services::revocation_query_service_impl::RevocationQueryServiceImpl,
        },
        infrastructure::persistence::repositories::revocation_repository::RevocationRepository,
        interfaces::handlers::revocation_handler::RevocationHandler,
    },
    shared::infrastructure::{
        clock::Clock, persistence::repositories::audit_event_repository::AuditEventRepository,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_revocation_handler(
    config: &AppConfig,
    revocation_repository: Arc<dyn RevocationRepository>,
    audit_repository: Arc<dyn AuditEventRepository>,
    clock: Arc<dyn Clock>,
) -> RevocationHandler {
    let command_service = Arc::new(RevocationCommandServiceImpl::new_with_sla_target(
        revocation_repository.clone(),
        audit_repository.clone(),
        clock.clone(),
        config.sla_target(),
    ));
    let query_service = Arc::new(RevocationQueryServiceImpl::new(
        revocation_repository,
        audit_repository,
        clock,
        config.environment.clone(),
    ));

    RevocationHandler::new(command_service, query_service)
}
