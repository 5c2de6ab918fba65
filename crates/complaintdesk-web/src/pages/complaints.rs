//! Complaints management panel

use super::panel_copy;
use crate::components::RecordsTable;
use complaintdesk_core::{Complaint, Section};
use leptos::prelude::*;

/// Heading plus the records table
#[component]
pub fn ComplaintsPage(
    /// Bundled records; the table works on its own copy
    complaints: Vec<Complaint>,
) -> impl IntoView {
    let copy = panel_copy(Section::Complaints);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">{copy.title}</h1>
                    <p class="page-subtitle">{copy.subtitle}</p>
                </div>
            </div>
            <RecordsTable complaints />
        </div>
    }
}
