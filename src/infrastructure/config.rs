use gloo::utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::domain::{
    asset::{AssetId, TimeWindow},
    dashboard::ViewTab,
    errors::{AppError, ValidationResult},
    logging::LogLevel,
};

pub const DEFAULT_API_BASE_URL: &str = "https://api.coinranking.com/v2";
pub const DEFAULT_ASSET_ID: &str = "Qwsogvtv82FCd";

/// Runtime configuration of the dashboard. Every field has a default, so a
/// partial object is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub asset_id: AssetId,
    pub reference_asset_id: AssetId,
    pub initial_window: TimeWindow,
    pub initial_tab: ViewTab,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            asset_id: AssetId::from(DEFAULT_ASSET_ID),
            reference_asset_id: AssetId::from(DEFAULT_ASSET_ID),
            initial_window: TimeWindow::default(),
            initial_tab: ViewTab::default(),
            log_level: LogLevel::Debug,
        }
    }
}

impl DashboardConfig {
    /// Read the object handed over from JavaScript. `undefined` and `null`
    /// mean defaults.
    pub fn from_js(value: &JsValue) -> ValidationResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = value
            .into_serde()
            .map_err(|e| AppError::ValidationError(format!("Invalid dashboard config: {}", e)))?;
        config.validate()
    }

    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ValidationError(format!("Invalid dashboard config: {}", e)))?;
        config.validate()
    }

    fn validate(self) -> ValidationResult<Self> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "apiBaseUrl cannot be empty".to_string(),
            ));
        }
        let asset_id = AssetId::new(self.asset_id.to_string())?;
        let reference_asset_id = AssetId::new(self.reference_asset_id.to_string())?;
        Ok(Self {
            asset_id,
            reference_asset_id,
            ..self
        })
    }
}
