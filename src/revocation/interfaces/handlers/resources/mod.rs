pub mod revocation_propagated_resource;
pub mod revocation_request_resource;
