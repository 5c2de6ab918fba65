//! Data and configuration compiled into the binary

use complaintdesk_core::fixture::parse_fixture;
use complaintdesk_core::{Complaint, DashboardConfig};
use tracing::error;

/// Complaint fixture rendered by the dashboard
pub const BUNDLED_FIXTURE: &str = include_str!("../data/complaints.json");

/// Dashboard configuration shipped with the app
pub const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

/// Records from the bundled fixture
///
/// A fixture that fails to load is logged and replaced by an empty set, so
/// the page still renders with zeroed stats and an empty table.
#[must_use]
pub fn bundled_complaints() -> Vec<Complaint> {
    load_or_empty(BUNDLED_FIXTURE)
}

/// Parse `json`, falling back to no records
#[must_use]
pub fn load_or_empty(json: &str) -> Vec<Complaint> {
    parse_fixture(json).unwrap_or_else(|e| {
        error!("Failed to load complaint fixture: {e}");
        Vec::new()
    })
}

/// Parse the embedded configuration
///
/// # Errors
///
/// Returns an error if the embedded TOML does not match the config schema.
pub fn embedded_config() -> complaintdesk_core::Result<DashboardConfig> {
    DashboardConfig::from_toml_str(EMBEDDED_CONFIG)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use complaintdesk_core::DashboardStats;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundled_fixture_is_valid() {
        let records = parse_fixture(BUNDLED_FIXTURE).unwrap();
        assert!(!records.is_empty());
        assert_eq!(bundled_complaints(), records);

        let stats = DashboardStats::from_complaints(&records);
        assert!(stats.resolved > 0);
        assert!(stats.pending > 0);
    }

    #[test]
    fn test_broken_fixture_renders_empty() {
        assert!(load_or_empty("not json").is_empty());
        assert!(load_or_empty(r#"[{"id": 1}]"#).is_empty());
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = embedded_config().unwrap();
        assert_eq!(config.ui.title, "Admin Panel");
        assert_eq!(config.navigator(), complaintdesk_core::Navigator::default());
    }
}
