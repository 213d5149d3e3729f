//! Http specific DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default age a file must reach before it can be pruned.
const DEFAULT_PRUNE_GRACE_SECONDS: u64 = 60;

/// Response to a form action that does not redirect.
#[derive(Debug, Serialize, ToSchema)]
pub(super) struct ActionResult {
    pub success: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(super) struct PrunePayload {
    /// Files modified more recently than this are kept.
    pub grace_seconds: Option<u64>,
}

impl PrunePayload {
    pub fn grace(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.grace_seconds.unwrap_or(DEFAULT_PRUNE_GRACE_SECONDS))
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(super) struct PruneResult {
    /// Public paths of the deleted files.
    pub removed: Vec<String>,
}
