pub mod catalog_query_service;
pub mod principal_risk_analyzer;
