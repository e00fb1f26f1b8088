pub mod catalog_handler;
pub mod resources;
