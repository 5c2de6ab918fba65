//! Stat cards for the dashboard overview

use complaintdesk_core::{Complaint, DashboardStats};
use leptos::prelude::*;

/// Direction of a month-over-month change badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Shown in green with an up arrow
    Up,
    /// Shown in red with a down arrow
    Down,
}

impl Trend {
    const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }

    const fn class_name(self) -> &'static str {
        match self {
            Self::Up => "trend-up",
            Self::Down => "trend-down",
        }
    }
}

/// Everything one stat card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCardData {
    /// Card heading
    pub label: &'static str,
    /// Formatted count
    pub value: String,
    /// Icon glyph
    pub icon: &'static str,
    /// Change badge text
    pub change: &'static str,
    /// Change direction
    pub trend: Trend,
    /// Accent class
    pub class_name: &'static str,
}

/// Card descriptors for `stats`, in display order
///
/// The change badges are fixed display copy; there is no history to compare
/// against.
#[must_use]
pub fn stat_cards(stats: &DashboardStats) -> [StatCardData; 4] {
    [
        StatCardData {
            label: "Total Complaints",
            value: format_count(stats.total),
            icon: "✉",
            change: "+12%",
            trend: Trend::Up,
            class_name: "stat-info",
        },
        StatCardData {
            label: "Resolved",
            value: format_count(stats.resolved),
            icon: "✓",
            change: "+8%",
            trend: Trend::Up,
            class_name: "stat-success",
        },
        StatCardData {
            label: "Pending",
            value: format_count(stats.pending),
            icon: "◷",
            change: "-5%",
            trend: Trend::Down,
            class_name: "stat-warning",
        },
        StatCardData {
            label: "Active Users",
            value: format_count(stats.users),
            icon: "☺",
            change: "+15%",
            trend: Trend::Up,
            class_name: "stat-neutral",
        },
    ]
}

/// Format large numbers with commas
#[must_use]
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Four summary cards over the bundled records
#[component]
#[allow(clippy::needless_pass_by_value)]
pub fn StatsSummary(
    /// Records to summarize
    complaints: Vec<Complaint>,
) -> impl IntoView {
    let stats = DashboardStats::from_complaints(&complaints);

    view! {
        <div class="stats-grid">
            {stat_cards(&stats).into_iter().map(|card| view! { <StatCard card /> }).collect_view()}
        </div>
    }
}

#[component]
fn StatCard(card: StatCardData) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", card.class_name)>
            <div class="stat-header">
                <span class="stat-label">{card.label}</span>
                <span class="stat-icon">{card.icon}</span>
            </div>
            <span class="stat-value">{card.value}</span>
            <div class="stat-change">
                <span class=format!("trend {}", card.trend.class_name())>
                    {card.trend.arrow()} {card.change}
                </span>
                <span class="stat-period">"vs last month"</span>
            </div>
        </div>
    }
}
