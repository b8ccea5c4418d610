use serde::{Deserialize, Serialize};

/// Per-app user analytics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalytics {
    pub app_id: String,
    pub total_users: u64,
    pub active_users_last24h: u64,
    pub registrations_last7d: u64,
}
