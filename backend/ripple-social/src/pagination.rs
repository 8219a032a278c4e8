/// Offset/limit pagination for list endpoints.
///
/// Page numbers start at 1. Requests beyond the last page yield an empty
/// page rather than an error.
use serde::Deserialize;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Hard ceiling on client-requested page sizes
pub const MAX_PAGE_SIZE: u32 = 50;

/// Query parameters accepted by paginated endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParams {
    /// Resolve raw query values into a usable (page, page_size) pair.
    ///
    /// Zero and missing values fall back to defaults; page_size is clamped
    /// to MAX_PAGE_SIZE.
    pub fn resolve(&self) -> ResolvedPage {
        let page = match self.page {
            Some(p) if p >= 1 => p,
            _ => 1,
        };
        let page_size = match self.page_size {
            Some(s) if s >= 1 => s.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        ResolvedPage { page, page_size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPage {
    pub page: u32,
    pub page_size: u32,
}

impl ResolvedPage {
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }
}
