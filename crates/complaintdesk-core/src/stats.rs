//! Summary counts shown on the dashboard overview

use crate::complaint::{Complaint, ComplaintStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Aggregate counts derived from a record set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    /// Number of records
    pub total: usize,
    /// Records with status `Resolved`
    pub resolved: usize,
    /// Records with status `Pending`
    pub pending: usize,
    /// Distinct submitter names
    pub users: usize,
}

impl DashboardStats {
    /// Reduce a record set to its summary counts
    #[must_use]
    pub fn from_complaints(records: &[Complaint]) -> Self {
        let resolved = records
            .iter()
            .filter(|c| c.status == ComplaintStatus::Resolved)
            .count();
        let pending = records
            .iter()
            .filter(|c| c.status == ComplaintStatus::Pending)
            .count();
        let users = records
            .iter()
            .map(|c| c.user.as_str())
            .collect::<HashSet<_>>()
            .len();

        let stats = Self {
            total: records.len(),
            resolved,
            pending,
            users,
        };
        debug!(?stats, "computed dashboard stats");
        stats
    }
}
