//! Panels for sections that only show a heading

use super::panel_copy;
use complaintdesk_core::Section;
use leptos::prelude::*;

/// Title card with a "coming soon" note
#[component]
pub fn PlaceholderPage(
    /// Section whose heading to show
    section: Section,
) -> impl IntoView {
    let copy = panel_copy(section);

    view! {
        <div class="page">
            <h1 class="page-title">{copy.title}</h1>
            <div class="card">
                <p class="muted">{copy.placeholder}</p>
            </div>
        </div>
    }
}
