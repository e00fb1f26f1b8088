pub mod catalog_domain_error;
pub mod risk_rating;
