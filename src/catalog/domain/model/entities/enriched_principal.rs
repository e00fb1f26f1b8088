use serde::{Deserialize, Serialize};

use crate::catalog::domain::model::{
    entities::principal::Principal, enums::risk_rating::RiskRating,
};

pub const UNASSIGNED_OWNER: &str = "UNASSIGNED";

/// Analyzer output for one principal. The source record is copied, not
/// modified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPrincipal {
    #[serde(flatten)]
    pub principal: Principal,
    pub owner: String,
    pub least_privilege_score: f64,
    pub is_orphan: bool,
    pub is_inactive: bool,
    pub risk_rating: RiskRating,
}

impl EnrichedPrincipal {
    pub fn arn(&self) -> &str {
        &self.principal.arn
    }

    pub fn name(&self) -> &str {
        &self.principal.name
    }
}
