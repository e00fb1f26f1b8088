pub mod authorization_repository;
pub mod in_memory;
