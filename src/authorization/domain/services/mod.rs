pub mod authorization_command_service;
pub mod authorization_query_service;
pub mod classification_policy;
