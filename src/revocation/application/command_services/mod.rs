pub mod revocation_command_service_impl;
