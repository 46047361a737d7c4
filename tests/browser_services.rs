#![cfg(target_arch = "wasm32")]
use crypto_details_wasm::domain::logging::{LogComponent, LogLevel, Logger, TimeProvider};
use crypto_details_wasm::infrastructure::DashboardConfig;
use crypto_details_wasm::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_is_wall_time() {
    let clock = BrowserTimeProvider::new();
    let now = clock.current_timestamp();
    assert!(now > 1_600_000_000_000);
    assert_eq!(clock.format_timestamp(now).len(), "00:00:00.000".len());
}

#[wasm_bindgen_test]
fn console_logger_accepts_every_level() {
    let logger = ConsoleLogger::new(LogLevel::Trace);
    logger.trace(LogComponent::Infrastructure("Test"), "trace");
    logger.info(LogComponent::Infrastructure("Test"), "info");
    logger.error(LogComponent::Infrastructure("Test"), "error");
}

#[wasm_bindgen_test]
fn undefined_config_means_defaults() {
    assert_eq!(
        DashboardConfig::from_js(&JsValue::UNDEFINED).ok(),
        Some(DashboardConfig::default())
    );
    assert!(DashboardConfig::from_js(&JsValue::from_str("not an object")).is_err());
}

#[wasm_bindgen_test]
fn dashboard_mounts_with_defaults() {
    assert!(crypto_details_wasm::mount_dashboard(JsValue::UNDEFINED).is_ok());
}
