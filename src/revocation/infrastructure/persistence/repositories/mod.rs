pub mod in_memory;
pub mod revocation_repository;
