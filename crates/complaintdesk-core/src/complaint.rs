//! Complaint records, search filtering and the resolve transition

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

/// Complaint identifier type
pub type ComplaintId = u32;

/// Complaint status enumeration
///
/// The only transition is `Pending` to `Resolved`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ComplaintStatus {
    /// Awaiting action
    #[default]
    Pending,
    /// Closed by an administrator
    Resolved,
}

impl ComplaintStatus {
    /// Display text, also used for search matching
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }

    /// Whether the record has been resolved
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single complaint entry from the fixture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Complaint {
    /// Unique identifier
    pub id: ComplaintId,

    /// Submitter name
    #[validate(length(min = 1, max = 100))]
    pub user: String,

    /// Complaint category
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub category: String,

    /// Current status
    pub status: ComplaintStatus,

    /// Latitude in degrees
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    /// Longitude in degrees
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl Complaint {
    /// Create a pending complaint
    pub fn new(
        id: ComplaintId,
        user: impl Into<String>,
        category: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            id,
            user: user.into(),
            category: category.into(),
            status: ComplaintStatus::Pending,
            lat,
            lng,
        }
    }

    /// Set the status, consuming the record
    #[must_use]
    pub const fn with_status(mut self, status: ComplaintStatus) -> Self {
        self.status = status;
        self
    }

    /// Avatar letter: the first character of the submitter name, uppercased
    #[must_use]
    pub fn initial(&self) -> String {
        self.user
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Coordinates rendered to four decimal places
    #[must_use]
    pub fn location_label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }

    /// Case-insensitive match against user, category or status text
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.user.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.status.as_str().to_lowercase().contains(needle)
    }
}

/// Records matching `query`, in input order
///
/// The input slice is left untouched; an empty query returns every record.
#[must_use]
pub fn filter_complaints(records: &[Complaint], query: &str) -> Vec<Complaint> {
    let needle = query.to_lowercase();
    let filtered: Vec<Complaint> = records
        .iter()
        .filter(|complaint| complaint.matches(&needle))
        .cloned()
        .collect();

    debug!(
        query,
        matched = filtered.len(),
        total = records.len(),
        "filtered complaints"
    );
    filtered
}

/// Mark the pending record with `id` as resolved
///
/// Returns `true` when a status changed. Unknown ids and records that are
/// already resolved are left alone.
pub fn resolve_complaint(records: &mut [Complaint], id: ComplaintId) -> bool {
    match records
        .iter_mut()
        .find(|complaint| complaint.id == id && !complaint.status.is_resolved())
    {
        Some(complaint) => {
            complaint.status = ComplaintStatus::Resolved;
            info!(id, user = %complaint.user, "complaint resolved");
            true
        }
        None => false,
    }
}
