//! Search quota information.

/// Remaining quota for the search resource.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the quota resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}
