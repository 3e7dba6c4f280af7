//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stratus_core::types::pagination::PageRequest;

/// Query parameters for the paginated file listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Optional folder filter.
    #[serde(default, alias = "folderId")]
    pub folder_id: Option<Uuid>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

impl PaginationParams {
    /// Converts to a `PageRequest`, clamping out-of-range values.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}
