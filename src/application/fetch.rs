use crate::application::composer::{DashboardMessage, FetchCommand};
use crate::domain::{asset::AssetDataSource, logging::LogComponent};
use crate::log_warn;

/// Run one command against the data source and turn the outcome into the
/// message the composer expects. Failures become absent results.
pub async fn execute<S>(source: &S, command: FetchCommand) -> DashboardMessage
where
    S: AssetDataSource + ?Sized,
{
    match command {
        FetchCommand::AssetDetail {
            target,
            request,
            asset,
        } => {
            let detail = match source.fetch_asset_detail(&asset).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    log_warn!(
                        LogComponent::Application("Fetch"),
                        "detail {} failed: {}",
                        asset,
                        e
                    );
                    None
                }
            };
            DashboardMessage::DetailResolved {
                target,
                request,
                detail,
            }
        }
        FetchCommand::AssetHistory {
            request,
            asset,
            window,
        } => {
            let series = match source.fetch_asset_history(&asset, window).await {
                Ok(series) => Some(series),
                Err(e) => {
                    log_warn!(
                        LogComponent::Application("Fetch"),
                        "history {}/{} failed: {}",
                        asset,
                        window,
                        e
                    );
                    None
                }
            };
            DashboardMessage::HistoryResolved {
                request,
                window,
                series,
            }
        }
    }
}
