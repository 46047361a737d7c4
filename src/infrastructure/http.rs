use gloo::net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::domain::{
    asset::{AssetDataSource, AssetDetail, AssetId, HistorySeries, TimeWindow},
    errors::{AppError, NetworkResult},
    logging::LogComponent,
};
use crate::infrastructure::config::DashboardConfig;
use crate::infrastructure::dto::{ApiEnvelope, CoinData, HistoryDto};
use crate::{log_debug, log_info};

const COMPONENT: LogComponent = LogComponent::Infrastructure("CoinRankingHttpClient");

/// HTTP client for the coin ranking API
#[derive(Clone)]
pub struct CoinRankingHttpClient {
    base_url: String,
    api_key: Option<String>,
}

impl Default for CoinRankingHttpClient {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl CoinRankingHttpClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.api_key.clone())
    }

    pub fn detail_url(&self, id: &AssetId) -> String {
        format!("{}/coin/{}", self.base_url, id.value())
    }

    pub fn history_url(&self, id: &AssetId, window: TimeWindow) -> String {
        format!(
            "{}/coin/{}/history?timePeriod={}",
            self.base_url,
            id.value(),
            window.query_param()
        )
    }

    fn request(&self, url: &str) -> RequestBuilder {
        let builder = Request::get(url).header("Accept", "application/json");
        match &self.api_key {
            Some(key) => builder.header("x-access-token", key),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> NetworkResult<T> {
        log_debug!(COMPONENT, "GET {}", url);

        let response = self
            .request(url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse JSON: {:?}", e)))?;

        if envelope.status != "success" {
            return Err(AppError::NetworkError(format!(
                "API status: {}",
                envelope.status
            )));
        }

        Ok(envelope.data)
    }
}

impl AssetDataSource for CoinRankingHttpClient {
    async fn fetch_asset_detail(&self, id: &AssetId) -> NetworkResult<AssetDetail> {
        let data: CoinData = self.get_json(&self.detail_url(id)).await?;
        let detail = data.coin.into_domain();
        log_info!(COMPONENT, "✅ Loaded detail for {}", detail.name);
        Ok(detail)
    }

    async fn fetch_asset_history(
        &self,
        id: &AssetId,
        window: TimeWindow,
    ) -> NetworkResult<HistorySeries> {
        let data: HistoryDto = self.get_json(&self.history_url(id, window)).await?;
        let series = data.into_domain();
        log_info!(
            COMPONENT,
            "✅ Loaded {} history points for {}/{}",
            series.points.len(),
            id,
            window
        );
        Ok(series)
    }
}
