use crate::domain::asset::{AssetDetail, AssetId, HistorySeries, TimeWindow};
use crate::domain::errors::NetworkResult;

/// Interface of the remote data source consumed by the dashboard.
///
/// Implementations may serve from cache; callers only rely on results being
/// eventually consistent with the latest request for a key.
#[allow(async_fn_in_trait)]
pub trait AssetDataSource {
    /// Detail record of one asset
    async fn fetch_asset_detail(&self, id: &AssetId) -> NetworkResult<AssetDetail>;

    /// Price history of one asset over one window
    async fn fetch_asset_history(
        &self,
        id: &AssetId,
        window: TimeWindow,
    ) -> NetworkResult<HistorySeries>;
}
