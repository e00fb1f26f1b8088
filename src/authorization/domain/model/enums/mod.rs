pub mod authorization_domain_error;
pub mod classification_tier;
pub mod permission_effect;
