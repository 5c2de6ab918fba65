//! Browser entry point for the complaint dashboard
#![forbid(unsafe_code)]

use complaintdesk_web::{App, fixture};
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    let loaded = fixture::embedded_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // tracing forwards to the log facade, which console_log prints
    let level = config.logging.level.parse().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    if let Err(e) = &loaded {
        warn!("Failed to load config: {e}, using defaults");
    }
    info!("Starting complaint dashboard");

    let complaints = fixture::bundled_complaints();
    mount_to_body(move || view! { <App config complaints /> });
}
