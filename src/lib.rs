use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger, init_time_provider};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use presentation::wasm_api::mount_dashboard;

/// Runs once when the module is instantiated. The logger itself is installed
/// by `mountDashboard`, which knows the configured level.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Dashboard module initialized",
    );
}
