pub mod in_memory_authorization_repository;
