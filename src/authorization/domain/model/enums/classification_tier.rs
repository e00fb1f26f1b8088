use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClassificationTier {
    Low,
    Moderate,
    Sensitive,
}

impl ClassificationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::Sensitive => "SENSITIVE",
        }
    }

    pub fn requires_approval(&self) -> bool {
        matches!(self, Self::Sensitive)
    }
}

impl fmt::Display for ClassificationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
