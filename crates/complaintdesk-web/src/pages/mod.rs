//! Content panels, one per sidebar section

pub mod complaints;
pub mod dashboard;
pub mod placeholder;

use complaintdesk_core::Section;

/// Fixed text for a panel header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelCopy {
    /// Page heading
    pub title: &'static str,
    /// Line under the heading
    pub subtitle: Option<&'static str>,
    /// Body text for sections that are not built yet
    pub placeholder: Option<&'static str>,
}

/// Header text for `section`
#[must_use]
pub const fn panel_copy(section: Section) -> PanelCopy {
    const fn soon(title: &'static str, placeholder: &'static str) -> PanelCopy {
        PanelCopy {
            title,
            subtitle: None,
            placeholder: Some(placeholder),
        }
    }

    match section {
        Section::Dashboard => PanelCopy {
            title: "Dashboard Overview",
            subtitle: Some("Monitor your admin panel metrics and activities"),
            placeholder: None,
        },
        Section::Complaints => PanelCopy {
            title: "Complaints Management",
            subtitle: Some("View and manage all user complaints"),
            placeholder: None,
        },
        Section::Users => soon(
            "Users Management",
            "User management interface coming soon...",
        ),
        Section::Analytics => soon("Analytics & Insights", "Advanced analytics coming soon..."),
        Section::Security => soon(
            "Security Center",
            "Security monitoring tools coming soon...",
        ),
        Section::Reports => soon(
            "Reports & Export",
            "Report generation tools coming soon...",
        ),
        Section::Settings => soon(
            "System Settings",
            "System configuration panel coming soon...",
        ),
    }
}
