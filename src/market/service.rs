use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::AppError,
    market::model::{ChartParams, MarketChartResponse, PricePoint},
};

const VS_CURRENCY: &str = "usd";

#[derive(Clone)]
pub struct MarketService {
    client: Client,
    base_url: Arc<str>,
}

impl MarketService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: Arc::from(config.upstream_base_url.trim_end_matches('/')),
        })
    }

    /// Builds the market chart URL. Parameters are substituted as-is, without
    /// escaping.
    pub fn market_chart_url(&self, params: &ChartParams) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url, params.coin, VS_CURRENCY, params.days
        )
    }

    /// Fetches the chart and returns its `prices` series. The upstream status
    /// code is not checked: any body that decodes is a success.
    pub async fn get_market_chart(&self, params: &ChartParams) -> Result<Vec<PricePoint>, AppError> {
        let url = self.market_chart_url(params);
        let result = self.client.get(&url).send().await;
        info!("Upstream request: {}", url);

        let response = result.map_err(|e| {
            warn!("Failed to fetch {}: {}", url, e);
            AppError::from(e)
        })?;
        debug!("Upstream responded with {}", response.status());

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read upstream body from {}: {}", url, e);
            AppError::DecodeError(e.to_string())
        })?;

        let chart = MarketChartResponse::from_slice(&body).map_err(|e| {
            warn!("Invalid upstream response from {}: {}", url, e);
            AppError::from(e)
        })?;

        Ok(chart.into_prices())
    }
}
