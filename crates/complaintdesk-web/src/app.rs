//! Root component: sidebar shell plus the selected panel

use crate::components::Sidebar;
use crate::pages::{complaints::ComplaintsPage, dashboard::DashboardOverview, placeholder::PlaceholderPage};
use crate::state::ShellState;
use complaintdesk_core::{Complaint, DashboardConfig, Section};
use leptos::prelude::*;

/// Main application component
#[component]
pub fn App(
    /// Shell configuration
    config: DashboardConfig,
    /// Records from the fixture
    complaints: Vec<Complaint>,
) -> impl IntoView {
    let shell = ShellState::new(config.navigator());
    let fixture = StoredValue::new(complaints);

    // Collapsing the sidebar must not remount the panel, so the content only
    // tracks the selected section.
    let selected = Memo::new(move |_| shell.selected());

    view! {
        <div class="app">
            <Sidebar shell title=config.ui.title />
            <main class="content">
                {move || section_view(selected.get(), fixture.get_value())}
            </main>
        </div>
    }
}

fn section_view(section: Section, complaints: Vec<Complaint>) -> AnyView {
    match section {
        Section::Dashboard => view! { <DashboardOverview complaints /> }.into_any(),
        Section::Complaints => view! { <ComplaintsPage complaints /> }.into_any(),
        Section::Users
        | Section::Analytics
        | Section::Security
        | Section::Reports
        | Section::Settings => view! { <PlaceholderPage section /> }.into_any(),
    }
}
