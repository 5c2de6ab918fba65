//! Recent alerts feed

use leptos::prelude::*;

/// Alert severity, drives the indicator color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Needs attention
    Warning,
    /// Informational
    Info,
    /// Something completed
    Success,
}

impl AlertLevel {
    /// CSS class for the indicator dot
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Warning => "alert-dot alert-warning",
            Self::Info => "alert-dot alert-info",
            Self::Success => "alert-dot alert-success",
        }
    }
}

/// One entry in the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Headline
    pub message: &'static str,
    /// Relative age as displayed
    pub age: &'static str,
    /// Severity
    pub level: AlertLevel,
}

/// Fixed feed shown on the overview
pub const RECENT_ALERTS: [Alert; 3] = [
    Alert {
        message: "High priority complaint received",
        age: "2 minutes ago",
        level: AlertLevel::Warning,
    },
    Alert {
        message: "New user registration",
        age: "5 minutes ago",
        level: AlertLevel::Info,
    },
    Alert {
        message: "Complaint resolved",
        age: "12 minutes ago",
        level: AlertLevel::Success,
    },
];

/// List of [`RECENT_ALERTS`]
#[component]
pub fn RecentAlerts() -> impl IntoView {
    view! {
        <div class="alert-list">
            {RECENT_ALERTS
                .into_iter()
                .map(|alert| {
                    view! {
                        <div class="alert-item">
                            <span class=alert.level.class_name()></span>
                            <div class="alert-body">
                                <p class="alert-message">{alert.message}</p>
                                <p class="alert-age">{alert.age}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recent_alerts_order() {
        let levels: Vec<_> = RECENT_ALERTS.iter().map(|a| a.level).collect();
        assert_eq!(
            levels,
            vec![AlertLevel::Warning, AlertLevel::Info, AlertLevel::Success]
        );
        assert_eq!(RECENT_ALERTS[0].message, "High priority complaint received");
        assert_eq!(RECENT_ALERTS[2].age, "12 minutes ago");
    }
}
