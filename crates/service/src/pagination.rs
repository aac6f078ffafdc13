//! Offset pagination for list endpoints.

use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 100;

/// `skip` rows are passed over, then at most `limit` rows are returned.
/// Missing fields fall back to `skip = 0`, `limit = 100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

/// Largest value the SQL drivers bind for `LIMIT`/`OFFSET` (a signed 64-bit integer).
pub const MAX_BOUND: u64 = i64::MAX as u64;

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// `skip`, clamped to [`MAX_BOUND`].
    pub fn offset(&self) -> u64 {
        self.skip.min(MAX_BOUND)
    }

    /// `limit`, clamped to [`MAX_BOUND`].
    pub fn row_limit(&self) -> u64 {
        self.limit.min(MAX_BOUND)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}
