use serde::{Deserialize, Serialize};

use super::value_objects::AssetId;

/// Supply record of an asset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Supply {
    pub total: Option<f64>,
    pub circulating: Option<f64>,
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllTimeHigh {
    pub price: Option<f64>,
}

/// External resource attached to an asset (website, explorer, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetLink {
    pub name: String,
    pub kind: String,
    pub url: String,
}

/// Entity - full detail record of one asset. Every numeric field is optional:
/// the source omits what it does not know.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetDetail {
    pub id: AssetId,
    pub name: String,
    pub price: Option<f64>,
    pub rank: Option<u32>,
    pub volume_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub all_time_high: Option<AllTimeHigh>,
    pub number_of_markets: Option<u64>,
    pub number_of_exchanges: Option<u64>,
    pub supply: Option<Supply>,
    /// Markup as delivered by the source.
    pub description: String,
    pub links: Vec<AssetLink>,
}

impl AssetDetail {
    pub fn all_time_high_price(&self) -> Option<f64> {
        self.all_time_high.as_ref().and_then(|ath| ath.price)
    }

    pub fn supply_confirmed(&self) -> bool {
        self.supply.as_ref().is_some_and(|supply| supply.confirmed)
    }
}

/// Single sample of a price series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Seconds since the epoch.
    pub timestamp: u64,
    pub price: Option<f64>,
}

/// Entity - price history for one (asset, window) pair
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistorySeries {
    pub points: Vec<PricePoint>,
    /// Percentage change over the whole window.
    pub change: Option<f64>,
}

impl HistorySeries {
    pub fn new(points: Vec<PricePoint>, change: Option<f64>) -> Self {
        Self { points, change }
    }

    /// Points with a known price, oldest first.
    pub fn chronological(&self) -> Vec<(u64, f64)> {
        let mut samples: Vec<(u64, f64)> = self
            .points
            .iter()
            .filter_map(|p| p.price.filter(|v| v.is_finite()).map(|v| (p.timestamp, v)))
            .collect();
        samples.sort_by_key(|(ts, _)| *ts);
        samples
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
