pub mod identity_source;
