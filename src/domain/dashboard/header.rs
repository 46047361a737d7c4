use serde::Serialize;

use crate::domain::asset::{AssetDetail, HistorySeries};
use crate::domain::format::{self, UNAVAILABLE};

/// Heading strip above the navigation: reference price and window change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderSummary {
    pub reference_price: String,
    pub change: String,
}

impl HeaderSummary {
    /// The reference record may resolve after everything else; until then its
    /// slot shows the placeholder.
    pub fn derive(reference: Option<&AssetDetail>, history: Option<&HistorySeries>) -> Self {
        let reference_price = match reference.and_then(|detail| detail.price) {
            Some(price) if price.is_finite() => format!("${}", format::abbreviate(price)),
            _ => UNAVAILABLE.to_string(),
        };
        let change = format::percent(history.and_then(|series| series.change));
        Self {
            reference_price,
            change,
        }
    }

    pub fn change_label(&self) -> String {
        if self.change == UNAVAILABLE {
            format!("Change: {}", self.change)
        } else {
            format!("Change: {}%", self.change)
        }
    }
}
