pub mod authorization;
pub mod catalog;
pub mod config;
pub mod revocation;
pub mod shared;
pub mod synthetic;
