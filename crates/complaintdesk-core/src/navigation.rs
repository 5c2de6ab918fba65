//! Sidebar sections and the navigator state

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the sidebar destinations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Overview with stats, heatmap and alerts
    #[default]
    Dashboard,
    /// Complaint records table
    Complaints,
    /// User management placeholder
    Users,
    /// Analytics placeholder
    Analytics,
    /// Security placeholder
    Security,
    /// Reports placeholder
    Reports,
    /// Settings placeholder
    Settings,
}

impl Section {
    /// Every section in sidebar order
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::Complaints,
        Self::Users,
        Self::Analytics,
        Self::Security,
        Self::Reports,
        Self::Settings,
    ];

    /// Stable lowercase identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Complaints => "complaints",
            Self::Users => "users",
            Self::Analytics => "analytics",
            Self::Security => "security",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    /// Sidebar label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Complaints => "Complaints",
            Self::Users => "Users",
            Self::Analytics => "Analytics",
            Self::Security => "Security",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == value)
            .ok_or_else(|| Error::UnknownSection {
                value: value.to_string(),
            })
    }
}

/// Selected section and sidebar collapse state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    selected: Section,
    sidebar_collapsed: bool,
}

impl Navigator {
    /// Navigator starting at `selected`
    #[must_use]
    pub const fn new(selected: Section, sidebar_collapsed: bool) -> Self {
        Self {
            selected,
            sidebar_collapsed,
        }
    }

    /// Currently selected section
    #[must_use]
    pub const fn selected(&self) -> Section {
        self.selected
    }

    /// Whether the sidebar shows icons only
    #[must_use]
    pub const fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Whether `section` is the active one
    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.selected == section
    }

    /// Switch to `section`
    pub const fn select(&mut self, section: Section) {
        self.selected = section;
    }

    /// Collapse an expanded sidebar or expand a collapsed one
    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
