pub mod resources;
pub mod revocation_handler;
