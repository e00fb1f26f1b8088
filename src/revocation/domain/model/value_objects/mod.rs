pub mod revocation_id;
pub mod revocation_subject;
