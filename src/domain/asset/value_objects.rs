use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

use crate::domain::errors::{AppError, ValidationResult};

/// Value Object - identifier of a tracked asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: String) -> ValidationResult<Self> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Asset id cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - historical span requested from the data source
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TimeWindow {
    #[strum(serialize = "3h")]
    #[serde(rename = "3h")]
    ThreeHours,

    #[strum(serialize = "24h")]
    #[serde(rename = "24h")]
    TwentyFourHours,

    #[default]
    #[strum(serialize = "7d")]
    #[serde(rename = "7d")]
    SevenDays,

    #[strum(serialize = "30d")]
    #[serde(rename = "30d")]
    ThirtyDays,

    #[strum(serialize = "3m")]
    #[serde(rename = "3m")]
    ThreeMonths,

    #[strum(serialize = "3y")]
    #[serde(rename = "3y")]
    ThreeYears,
}

impl TimeWindow {
    /// Control-surface order, shortest span first.
    pub fn all() -> Vec<TimeWindow> {
        TimeWindow::iter().collect()
    }

    pub fn label(&self) -> &str {
        self.as_ref()
    }

    /// Query parameter understood by the history endpoint.
    pub fn query_param(&self) -> &str {
        self.as_ref()
    }

    /// Strict parse: anything outside the fixed set is rejected.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        TimeWindow::from_str(value).map_err(|_| {
            AppError::ValidationError(format!("Unknown time window: {}", value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_order_is_fixed() {
        let labels: Vec<String> = TimeWindow::iter().map(|w| w.to_string()).collect();
        assert_eq!(labels, ["3h", "24h", "7d", "30d", "3m", "3y"]);
    }

    #[test]
    fn default_window_is_seven_days() {
        assert_eq!(TimeWindow::default(), TimeWindow::SevenDays);
    }

    #[test]
    fn blank_asset_id_rejected() {
        assert!(AssetId::new("  ".to_string()).is_err());
        assert_eq!(AssetId::new(" abc ".to_string()).unwrap().value(), "abc");
    }
}
