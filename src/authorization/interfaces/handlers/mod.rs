pub mod authorization_handler;
pub mod resources;
