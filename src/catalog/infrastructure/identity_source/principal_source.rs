use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::domain::model::entities::principal::Principal;

#[derive(Debug, Error)]
pub enum PrincipalSourceError {
    #[error("principal source request failed: {0}")]
    RequestFailed(String),

    #[error("principal inventory is unreadable: {0}")]
    InventoryUnreadable(String),

    #[error("pagination marker `{0}` is not recognised")]
    InvalidMarker(String),
}

#[derive(Clone, Debug, Default)]
pub struct PrincipalSourcePage {
    pub principals: Vec<Principal>,
    pub next_marker: Option<String>,
}

/// Paginated read access to the external identity inventory.
///
/// `marker` is `None` for the first page; the source returns the marker of
/// the next page, or `None` once the inventory is exhausted.
#[async_trait]
pub trait PrincipalSource: Send + Sync {
    async fn list_principals(
        &self,
        marker: Option<String>,
    ) -> Result<PrincipalSourcePage, PrincipalSourceError>;
}
