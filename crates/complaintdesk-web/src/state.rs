//! Reactive state holders
//!
//! All fields are `RwSignal`, which is `Copy`, so both holders are `Copy` and
//! can be moved into as many event handlers as needed.

use complaintdesk_core::complaint::ComplaintId;
use complaintdesk_core::{Complaint, Navigator, Section, filter_complaints, resolve_complaint};
use leptos::prelude::*;

/// Shell state: selected section and sidebar collapse
#[derive(Debug, Clone, Copy)]
pub struct ShellState {
    /// Navigator behind the sidebar
    pub navigator: RwSignal<Navigator>,
}

impl ShellState {
    /// Create shell state starting from `navigator`
    #[must_use]
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator: RwSignal::new(navigator),
        }
    }

    /// Current section (tracked)
    #[must_use]
    pub fn selected(&self) -> Section {
        self.navigator.with(Navigator::selected)
    }

    /// Whether the sidebar is collapsed (tracked)
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.navigator.with(Navigator::sidebar_collapsed)
    }

    /// Whether `section` is active (tracked)
    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.navigator.with(|n| n.is_active(section))
    }

    /// Switch sections; re-selecting the current one notifies nobody
    pub fn select(&self, section: Section) {
        self.navigator.maybe_update(|n| {
            let changed = !n.is_active(section);
            n.select(section);
            changed
        });
    }

    /// Flip the sidebar collapse state
    pub fn toggle_sidebar(&self) {
        self.navigator.update(Navigator::toggle_sidebar);
    }
}

/// Records table state: a local copy of the fixture plus the search query
#[derive(Debug, Clone, Copy)]
pub struct TableState {
    /// Local record copy; resolve mutates this and nothing else
    pub complaints: RwSignal<Vec<Complaint>>,
    /// Current search text
    pub query: RwSignal<String>,
}

impl TableState {
    /// Create table state over a copy of `complaints`
    #[must_use]
    pub fn new(complaints: Vec<Complaint>) -> Self {
        Self {
            complaints: RwSignal::new(complaints),
            query: RwSignal::new(String::new()),
        }
    }

    /// Replace the search text
    pub fn set_query(&self, query: String) {
        self.query.set(query);
    }

    /// Records matching the current query (tracked)
    #[must_use]
    pub fn filtered(&self) -> Vec<Complaint> {
        self.query
            .with(|query| self.complaints.with(|records| filter_complaints(records, query)))
    }

    /// Resolve a pending record; returns whether anything changed
    pub fn resolve(&self, id: ComplaintId) -> bool {
        let mut changed = false;
        self.complaints.maybe_update(|records| {
            changed = resolve_complaint(records, id);
            changed
        });
        changed
    }
}
