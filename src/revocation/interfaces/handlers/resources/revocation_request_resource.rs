use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRequestResource {
    #[serde(default)]
    #[validate(length(min = 1), regex(path = "*SUBJECT_TYPE_REGEX"))]
    pub subject_type: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub subject_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub scope: String,
    pub reason: Option<String>,
    pub initiated_by: Option<String>,
}

lazy_static::lazy_static! {
    pub static ref SUBJECT_TYPE_REGEX: regex::Regex = regex::Regex::new(r"^\S+$").expect("valid regex");
}

#[derive(Clone, Debug, Serialize)]
pub struct RevocationCreatedResource {
    pub revocation_id: String,
    pub correlation_id: String,
}
