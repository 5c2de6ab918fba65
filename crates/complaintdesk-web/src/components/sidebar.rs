//! Collapsible sidebar navigation

use crate::state::ShellState;
use complaintdesk_core::Section;
use leptos::prelude::*;

/// Icon glyph shown beside each section label
#[must_use]
pub const fn section_glyph(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "▦",
        Section::Complaints => "✉",
        Section::Users => "☺",
        Section::Analytics => "▥",
        Section::Security => "⛨",
        Section::Reports => "▤",
        Section::Settings => "⚙",
    }
}

const fn toggle_glyph(collapsed: bool) -> &'static str {
    if collapsed { "☰" } else { "✕" }
}

/// Sidebar with title, collapse toggle and one button per section
#[component]
pub fn Sidebar(
    /// Shell state to read and drive
    shell: ShellState,
    /// Heading shown while expanded
    title: String,
) -> impl IntoView {
    let collapsed = move || shell.collapsed();

    view! {
        <aside class="sidebar" class:collapsed=collapsed>
            <div class="sidebar-header">
                <Show when=move || !collapsed()>
                    <h2 class="sidebar-title">{title.clone()}</h2>
                </Show>
                <button
                    class="btn btn-ghost sidebar-toggle"
                    on:click=move |_| shell.toggle_sidebar()
                >
                    {move || toggle_glyph(collapsed())}
                </button>
            </div>

            <nav class="sidebar-nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <NavButton shell section /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn NavButton(shell: ShellState, section: Section) -> impl IntoView {
    view! {
        <button
            class="nav-item"
            class:active=move || shell.is_active(section)
            title=section.label()
            on:click=move |_| shell.select(section)
        >
            <span class="nav-icon">{section_glyph(section)}</span>
            <Show when=move || !shell.collapsed()>
                <span class="nav-label">{section.label()}</span>
            </Show>
        </button>
    }
}
