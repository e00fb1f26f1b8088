pub mod authorization_command_service_impl;
