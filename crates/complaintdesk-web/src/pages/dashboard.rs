//! Dashboard overview panel

use super::panel_copy;
use crate::components::{ActivityHeatmap, RecentAlerts, StatsSummary};
use complaintdesk_core::{Complaint, Section};
use leptos::prelude::*;

/// Stats, heatmap and alerts
#[component]
pub fn DashboardOverview(
    /// Bundled records
    complaints: Vec<Complaint>,
) -> impl IntoView {
    let copy = panel_copy(Section::Dashboard);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">{copy.title}</h1>
                    <p class="page-subtitle">{copy.subtitle}</p>
                </div>
                <div class="live-indicator">
                    <span class="pulse">"⚡"</span>
                    <span>"Real-time data"</span>
                </div>
            </div>

            <StatsSummary complaints />

            <div class="panel-grid">
                <div class="card">
                    <h3 class="card-title">"▥ Activity Heatmap"</h3>
                    <ActivityHeatmap />
                </div>
                <div class="card">
                    <h3 class="card-title">"⚠ Recent Alerts"</h3>
                    <RecentAlerts />
                </div>
            </div>
        </div>
    }
}
