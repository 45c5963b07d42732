use serde::Deserialize;

/// Aggregate counters returned by `GET /api/admin/stats`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}
