use std::sync::Arc;

use crate::{
    authorization::{
        application::{
            command_services::authorization_command_service_impl::AuthorizationCommandServiceImpl,
            query_services::authorization_query_service_impl::AuthorizationQueryServiceImpl,
        },
        domain::model::entities::tool_classification_registry::ToolClassificationRegistry,
        infrastructure::persistence::repositories::authorization_repository::AuthorizationRepository,
        interfaces::handlers::authorization_handler::AuthorizationHandler,
    },
    shared::infrastructure::{
        clock::Clock, persistence::repositories::audit_event_repository::AuditEventRepository,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_authorization_handler(
    authorization_repository: Arc<dyn AuthorizationRepository>,
    audit_repository: Arc<dyn AuditEventRepository>,
    registry: Arc<ToolClassificationRegistry>,
    clock: Arc<dyn Clock>,
) -> AuthorizationHandler {
    let command_service = Arc::new(AuthorizationCommandServiceImpl::new(
        authorization_repository.clone(),
        audit_repository.clone(),
        clock.clone(),
    ));
    let query_service = Arc::new(AuthorizationQueryServiceImpl::new(
        authorization_repository,
        audit_repository,
        clock,
    ));

    AuthorizationHandler::new(command_service, query_service, registry)
}
