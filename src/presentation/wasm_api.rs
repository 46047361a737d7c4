use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::CryptoDashboard;
use crate::domain::logging::{LogComponent, init_logger};
use crate::infrastructure::{DashboardConfig, services::ConsoleLogger};
use crate::{log_error, log_info};

/// Mount the dashboard into `<body>`.
///
/// `config` is a plain JS object (see [`DashboardConfig`]); `undefined` uses
/// the defaults. A malformed object rejects the call.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(config: JsValue) -> Result<(), JsValue> {
    let config = DashboardConfig::from_js(&config).map_err(|e| {
        log_error!(LogComponent::Presentation("WASM"), "❌ {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    init_logger(Box::new(ConsoleLogger::new(config.log_level)));
    log_info!(
        LogComponent::Presentation("WASM"),
        "🚀 Mounting dashboard for {} (window {}, tab {})",
        config.asset_id,
        config.initial_window,
        config.initial_tab
    );

    mount_to_body(move || view! { <CryptoDashboard config=config /> });
    Ok(())
}
