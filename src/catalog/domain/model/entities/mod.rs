pub mod catalog_snapshot;
pub mod enriched_principal;
pub mod principal;
