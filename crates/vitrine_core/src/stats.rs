//! Dashboard counters.

use serde::{Deserialize, Serialize};

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct DashboardStats {
    total_messages: u64,
    unread_messages: u64,
    total_posts: u64,
    total_areas: u64,
}
