use crate::{
    config::app_config::AppConfig,
    revocation::interfaces::handlers::revocation_handler::RevocationHandler,
    synthetic::application::command_services::synthetic_revocation_probe::SyntheticRevocationProbe,
};

pub mod application;
pub mod domain;

pub fn build_synthetic_revocation_probe(
    config: &AppConfig,
    revocation_handler: RevocationHandler,
) -> SyntheticRevocationProbe {
    SyntheticRevocationProbe::new(revocation_handler)
        .with_propagation_delay(config.synthetic_propagation_delay())
}
