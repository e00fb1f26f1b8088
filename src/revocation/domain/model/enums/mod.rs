pub mod revocation_domain_error;
pub mod revocation_status;
