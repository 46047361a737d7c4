//! Browser-facing implementations: HTTP data source, configuration and
//! console logging.

pub mod config;
pub mod dto;
pub mod http;
pub mod services;

pub use config::DashboardConfig;
pub use http::CoinRankingHttpClient;
