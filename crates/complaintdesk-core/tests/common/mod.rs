//! Common test utilities and fixtures for integration tests

#![allow(dead_code, unreachable_pub)]

use complaintdesk_core::{Complaint, ComplaintStatus};
use serde_json::json;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Another harness may already own the global subscriber
        let _ = complaintdesk_core::init_logging("debug");
    });
}

/// Builder for complaint record sets
#[derive(Debug, Default)]
pub struct ComplaintSetBuilder {
    records: Vec<Complaint>,
}

impl ComplaintSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pending record with the next free id
    pub fn pending(mut self, user: &str, category: &str) -> Self {
        let id = self.next_id();
        self.records
            .push(Complaint::new(id, user, category, 40.7128, -74.006));
        self
    }

    /// Add a resolved record with the next free id
    pub fn resolved(mut self, user: &str, category: &str) -> Self {
        let id = self.next_id();
        self.records.push(
            Complaint::new(id, user, category, 40.7306, -73.9352)
                .with_status(ComplaintStatus::Resolved),
        );
        self
    }

    pub fn build(self) -> Vec<Complaint> {
        self.records
    }

    /// Serialize to the fixture wire format
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.records).unwrap_or_default()
    }

    fn next_id(&self) -> u32 {
        self.records.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}

/// The three-record set from the dashboard walkthrough
pub fn walkthrough_records() -> Vec<Complaint> {
    ComplaintSetBuilder::new()
        .pending("Alice", "Noise")
        .resolved("Bob", "Garbage")
        .pending("Alice", "Pothole")
        .build()
}

/// Hand-written fixture JSON, keyed the way the bundled file is
pub fn raw_fixture() -> String {
    json!([
        { "id": 1, "user": "Alice Johnson", "type": "Noise", "status": "Pending", "lat": 40.7128, "lng": -74.006 },
        { "id": 2, "user": "Bob Smith", "type": "Garbage", "status": "Resolved", "lat": 40.7306, "lng": -73.9352 },
        { "id": 3, "user": "Carol White", "type": "Pothole", "status": "Pending", "lat": 40.6782, "lng": -73.9442 }
    ])
    .to_string()
}
