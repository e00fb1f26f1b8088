pub mod synthetic_revocation_probe;
