//! Pure scoring and classification over principal records.
//!
//! Every function reads its inputs only; `now` is passed in so results are
//! reproducible.

use chrono::{DateTime, Duration, Utc};

use crate::catalog::domain::model::{
    entities::{
        enriched_principal::{EnrichedPrincipal, UNASSIGNED_OWNER},
        principal::Principal,
    },
    enums::risk_rating::RiskRating,
};

/// Score lost per statement action containing `*`.
pub const WILDCARD_ACTION_PENALTY: f64 = 0.30;
/// Score lost per statement resource containing `*`.
pub const WILDCARD_RESOURCE_PENALTY: f64 = 0.25;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RiskSignals {
    pub uses_wildcards: bool,
    pub inactive: bool,
    pub orphan: bool,
}

/// 1.0 for a principal without wildcards, minus a fixed penalty per wildcard
/// action and per wildcard resource, floored at 0.0.
pub fn compute_least_privilege_score(principal: &Principal) -> f64 {
    let penalty = principal.wildcard_action_count() as f64 * WILDCARD_ACTION_PENALTY
        + principal.wildcard_resource_count() as f64 * WILDCARD_RESOURCE_PENALTY;

    (1.0 - penalty).clamp(0.0, 1.0)
}

pub fn is_orphan(principal: &Principal) -> bool {
    principal.tags.owner.is_none()
}

pub fn detect_orphan_principals(principals: &[Principal]) -> Vec<&Principal> {
    principals.iter().filter(|p| is_orphan(p)).collect()
}

pub fn is_inactive(principal: &Principal, inactivity_days: u32, now: DateTime<Utc>) -> bool {
    match principal.last_used {
        None => true,
        Some(last_used) => now - last_used > Duration::days(i64::from(inactivity_days)),
    }
}

pub fn flag_inactive_principals(
    principals: &[Principal],
    inactivity_days: u32,
    now: DateTime<Utc>,
) -> Vec<&Principal> {
    principals
        .iter()
        .filter(|p| is_inactive(p, inactivity_days, now))
        .collect()
}

/// No adverse signal rates low, all three rate high, anything in between
/// rates moderate.
pub fn rate_signals(signals: RiskSignals) -> RiskRating {
    let adverse = [signals.uses_wildcards, signals.inactive, signals.orphan]
        .into_iter()
        .filter(|signal| *signal)
        .count();

    match adverse {
        0 => RiskRating::Low,
        3 => RiskRating::High,
        _ => RiskRating::Moderate,
    }
}

pub fn risk_signals(principal: &Principal, inactivity_days: u32, now: DateTime<Utc>) -> RiskSignals {
    RiskSignals {
        uses_wildcards: compute_least_privilege_score(principal) < 1.0,
        inactive: is_inactive(principal, inactivity_days, now),
        orphan: is_orphan(principal),
    }
}

pub fn compute_risk_rating(
    principal: &Principal,
    inactivity_days: u32,
    now: DateTime<Utc>,
) -> RiskRating {
    rate_signals(risk_signals(principal, inactivity_days, now))
}

pub fn resolve_owner(principal: &Principal) -> String {
    principal
        .owner_tag()
        .unwrap_or(UNASSIGNED_OWNER)
        .to_string()
}

pub fn enrich_principal(
    principal: &Principal,
    inactivity_days: u32,
    now: DateTime<Utc>,
) -> EnrichedPrincipal {
    let signals = risk_signals(principal, inactivity_days, now);

    EnrichedPrincipal {
        principal: principal.clone(),
        owner: resolve_owner(principal),
        least_privilege_score: compute_least_privilege_score(principal),
        is_orphan: signals.orphan,
        is_inactive: signals.inactive,
        risk_rating: rate_signals(signals),
    }
}
