//! Core types and logic for the `complaintdesk` admin dashboard
//!
//! Everything here is synchronous and target-independent so the same code
//! runs in the browser build and in native tests and benchmarks.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod color;
pub mod complaint;
pub mod config;
pub mod error;
pub mod fixture;
pub mod heatmap;
pub mod navigation;
pub mod stats;

// Re-export commonly used types
pub use color::{ColorScale, Rgba};
pub use complaint::{Complaint, ComplaintStatus, filter_complaints, resolve_complaint};
pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use heatmap::{Heatmap, HeatmapSample, MonthLabel, month_labels};
pub use navigation::{Navigator, Section};
pub use stats::DashboardStats;

/// Initialize the logging system for native targets
///
/// `RUST_LOG` wins over `default_level` when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default_level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Configuration {
            message: format!("failed to install tracing subscriber: {e}"),
        })
}
