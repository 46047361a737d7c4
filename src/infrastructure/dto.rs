use serde::Deserialize;

use crate::domain::asset::{
    AllTimeHigh, AssetDetail, AssetId, AssetLink, HistorySeries, PricePoint, Supply,
};

/// Parse a numeric field delivered as a string. Unparseable means unknown.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct CoinData {
    pub coin: CoinDto,
}

/// DTO for the coin detail record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDto {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(rename = "24hVolume", default)]
    pub volume_24h: Option<String>,
    #[serde(default)]
    pub market_cap: Option<String>,
    #[serde(default)]
    pub all_time_high: Option<AllTimeHighDto>,
    #[serde(default)]
    pub number_of_markets: Option<u64>,
    #[serde(default)]
    pub number_of_exchanges: Option<u64>,
    #[serde(default)]
    pub supply: Option<SupplyDto>,
    #[serde(default)]
    pub links: Option<Vec<LinkDto>>,
}

#[derive(Debug, Deserialize)]
pub struct AllTimeHighDto {
    #[serde(default)]
    pub price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SupplyDto {
    #[serde(default)]
    pub confirmed: Option<bool>,
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub circulating: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinkDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl LinkDto {
    /// A link without a target is dropped; a missing name falls back to the url.
    fn into_domain(self) -> Option<AssetLink> {
        let url = self.url.filter(|url| !url.trim().is_empty())?;
        Some(AssetLink {
            name: self.name.unwrap_or_else(|| url.clone()),
            kind: self.kind.unwrap_or_default(),
            url,
        })
    }
}

/// DTO for the price history of one window
#[derive(Debug, Deserialize)]
pub struct HistoryDto {
    #[serde(default)]
    pub change: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryPointDto>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryPointDto {
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl CoinDto {
    /// Converts the DTO into the domain entity
    pub fn into_domain(self) -> AssetDetail {
        AssetDetail {
            id: AssetId::from(self.uuid.as_deref().unwrap_or_default()),
            name: self.name.unwrap_or_default(),
            price: parse_number(self.price.as_deref()),
            rank: self.rank,
            volume_24h: parse_number(self.volume_24h.as_deref()),
            market_cap: parse_number(self.market_cap.as_deref()),
            all_time_high: self.all_time_high.map(|ath| AllTimeHigh {
                price: parse_number(ath.price.as_deref()),
            }),
            number_of_markets: self.number_of_markets,
            number_of_exchanges: self.number_of_exchanges,
            supply: self.supply.map(|supply| Supply {
                total: parse_number(supply.total.as_deref()),
                circulating: parse_number(supply.circulating.as_deref()),
                confirmed: supply.confirmed.unwrap_or(false),
            }),
            description: self.description.unwrap_or_default(),
            links: self
                .links
                .unwrap_or_default()
                .into_iter()
                .filter_map(LinkDto::into_domain)
                .collect(),
        }
    }
}

impl HistoryDto {
    pub fn into_domain(self) -> HistorySeries {
        HistorySeries::new(
            self.history
                .into_iter()
                .filter_map(|point| {
                    Some(PricePoint {
                        timestamp: point.timestamp?,
                        price: parse_number(point.price.as_deref()),
                    })
                })
                .collect(),
            parse_number(self.change.as_deref()),
        )
    }
}
