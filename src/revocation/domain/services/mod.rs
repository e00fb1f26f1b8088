pub mod revocation_command_service;
pub mod revocation_query_service;
