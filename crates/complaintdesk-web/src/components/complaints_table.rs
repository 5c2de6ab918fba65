//! Searchable complaints table with a resolve action

use crate::state::TableState;
use complaintdesk_core::{Complaint, ComplaintStatus};
use leptos::prelude::*;
use tracing::debug;

/// Shown in place of the table body when nothing matches
pub const EMPTY_RESULTS_MESSAGE: &str = "No complaints found matching your search.";

const fn status_badge(status: ComplaintStatus) -> (&'static str, &'static str) {
    match status {
        ComplaintStatus::Resolved => ("✓", "badge badge-success"),
        ComplaintStatus::Pending => ("◷", "badge badge-warning"),
    }
}

/// Records table over a local copy of `complaints`
///
/// Resolving a row only touches this table's copy.
#[component]
pub fn RecordsTable(
    /// Initial records
    complaints: Vec<Complaint>,
) -> impl IntoView {
    let table = TableState::new(complaints);
    let filtered = Memo::new(move |_| table.filtered());

    view! {
        <div class="card records-card">
            <div class="card-header">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search complaints..."
                    prop:value=move || table.query.get()
                    on:input=move |ev| table.set_query(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || filtered.with(|rows| !rows.is_empty())
                fallback=|| view! { <div class="empty-state">{EMPTY_RESULTS_MESSAGE}</div> }
            >
                <table class="records-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"User"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th>"Location"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        // Keyed on status too so a resolved row is rebuilt
                        <For
                            each=move || filtered.get()
                            key=|c| (c.id, c.status)
                            children=move |c| view! { <RecordRow complaint=c table /> }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn RecordRow(complaint: Complaint, table: TableState) -> impl IntoView {
    let id = complaint.id;
    let (glyph, badge_class) = status_badge(complaint.status);
    let pending = !complaint.status.is_resolved();

    view! {
        <tr>
            <td class="cell-id">{format!("#{id}")}</td>
            <td>
                <div class="user-cell">
                    <span class="avatar">{complaint.initial()}</span>
                    <span>{complaint.user.clone()}</span>
                </div>
            </td>
            <td><span class="badge badge-type">{complaint.category.clone()}</span></td>
            <td>
                <span class=badge_class>{glyph} " " {complaint.status.as_str()}</span>
            </td>
            <td class="cell-location">{complaint.location_label()}</td>
            <td class="cell-actions">
                <button
                    class="btn btn-ghost"
                    title="View"
                    on:click=move |_| debug!(id, "view complaint")
                >
                    "👁"
                </button>
                <Show when=move || pending>
                    <button
                        class="btn btn-success"
                        title="Resolve"
                        on:click=move |_| {
                            table.resolve(id);
                        }
                    >
                        "✓"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
