//! Complaint dashboard web interface
//!
//! A client-side rendered Leptos app: sidebar navigation, summary cards, a
//! searchable complaints table and a synthetic activity heatmap, all driven by
//! a fixture bundled into the binary.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod components;
pub mod fixture;
pub mod pages;
pub mod state;

// Re-export the root component
pub use app::App;
pub use state::{ShellState, TableState};
