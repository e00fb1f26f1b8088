pub mod principal_source;
pub mod static_principal_source;
