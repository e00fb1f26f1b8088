pub mod create_revocation_request_command;
