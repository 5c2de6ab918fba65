//! UI components for the dashboard

pub mod alerts;
pub mod complaints_table;
pub mod heatmap;
pub mod sidebar;
pub mod stats;

pub use alerts::{Alert, AlertLevel, RECENT_ALERTS, RecentAlerts};
pub use complaints_table::{EMPTY_RESULTS_MESSAGE, RecordsTable};
pub use heatmap::ActivityHeatmap;
pub use sidebar::{Sidebar, section_glyph};
pub use stats::{StatCardData, StatsSummary, Trend, format_count, stat_cards};
