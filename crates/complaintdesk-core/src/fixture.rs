//! Loading and validating the bundled complaint fixture

use crate::complaint::Complaint;
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::info;
use validator::Validate;

/// Parse a JSON array of complaint records
///
/// Every record must pass field validation and ids must be unique.
///
/// # Errors
///
/// Returns [`Error::Fixture`] for malformed JSON, [`Error::Validation`] for a
/// record with an empty name or out-of-range coordinates, and
/// [`Error::DuplicateId`] when two records share an id.
pub fn parse_fixture(json: &str) -> Result<Vec<Complaint>> {
    let records: Vec<Complaint> = serde_json::from_str(json)?;
    validate_records(&records)?;

    info!(count = records.len(), "loaded complaint fixture");
    Ok(records)
}

/// Check field rules and id uniqueness for an already-parsed record set
///
/// # Errors
///
/// See [`parse_fixture`].
pub fn validate_records(records: &[Complaint]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for complaint in records {
        if let Err(errors) = complaint.validate() {
            let field = errors
                .field_errors()
                .keys()
                .map(ToString::to_string)
                .min()
                .unwrap_or_default();
            return Err(Error::Validation {
                field,
                message: format!("complaint {}: {errors}", complaint.id),
            });
        }
        if !seen.insert(complaint.id) {
            return Err(Error::DuplicateId { id: complaint.id });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;
    use crate::complaint::ComplaintStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_fixture() {
        let json = r#"[
            {"id": 1, "user": "Alice", "type": "Noise", "status": "Pending", "lat": 1.0, "lng": 2.0},
            {"id": 2, "user": "Bob", "type": "Garbage", "status": "Resolved", "lat": -33.8688, "lng": 151.2093}
        ]"#;

        let records = parse_fixture(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].status, ComplaintStatus::Resolved);
        assert_eq!(records[1].category, "Garbage");
    }

    #[test]
    fn test_empty_fixture() {
        assert!(parse_fixture("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_fixture("[{"), Err(Error::Fixture(_))));
        assert!(matches!(parse_fixture(r#"{"id": 1}"#), Err(Error::Fixture(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 4, "user": "Alice", "type": "Noise", "status": "Pending", "lat": 1.0, "lng": 2.0},
            {"id": 4, "user": "Bob", "type": "Noise", "status": "Pending", "lat": 1.0, "lng": 2.0}
        ]"#;

        assert!(matches!(parse_fixture(json), Err(Error::DuplicateId { id: 4 })));
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let json = r#"[{"id": 9, "user": "Alice", "type": "Noise", "status": "Pending", "lat": 91.0, "lng": 2.0}]"#;

        match parse_fixture(json) {
            Err(Error::Validation { field, message }) => {
                assert_eq!(field, "lat");
                assert!(message.starts_with("complaint 9:"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }
}
