pub mod in_memory_revocation_repository;
