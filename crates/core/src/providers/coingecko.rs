use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::traits::PriceProvider;
use crate::errors::CoreError;
use crate::models::asset::Backend;
use crate::models::price::{Horizon, PricePoint};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Request timeout — single attempt, no retry or backoff.
const TIMEOUT: Duration = Duration::from_secs(10);

/// CoinGecko API provider for cryptocurrency prices.
///
/// - **Free**: No API key required.
/// - **Identifiers**: lowercase slugs like "bitcoin", "ethereum",
///   passed through unmodified.
/// - **Endpoints**: `/simple/price`, `/coins/{id}/market_chart`
///
/// All quotes are in USD.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Extract the USD spot price for `identifier` from a `/simple/price`
    /// response body (`{"bitcoin":{"usd":65000}}`).
    pub fn parse_simple_price(body: &str, identifier: &str) -> Result<f64, CoreError> {
        let resp: HashMap<String, SimplePriceEntry> =
            serde_json::from_str(body).map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Malformed simple-price response: {e}"),
            })?;

        resp.get(identifier)
            .and_then(|entry| entry.usd)
            .ok_or_else(|| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("No USD price for {identifier} in response"),
            })
    }

    /// Extract the `[timestamp, price]` pairs from a `/market_chart`
    /// response body, mapping millisecond timestamps to calendar dates.
    pub fn parse_market_chart(body: &str) -> Result<Vec<PricePoint>, CoreError> {
        let resp: MarketChartResponse =
            serde_json::from_str(body).map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Malformed market-chart response: {e}"),
            })?;

        let points = resp
            .prices
            .iter()
            .filter_map(|&(ts_millis, price)| {
                let dt = chrono::DateTime::from_timestamp_millis(ts_millis)?;
                Some(PricePoint {
                    date: dt.date_naive(),
                    price,
                })
            })
            .collect();

        Ok(points)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct SimplePriceEntry {
    usd: Option<f64>,
}

#[derive(Deserialize)]
struct MarketChartResponse {
    #[serde(default)]
    prices: Vec<(i64, f64)>,
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    fn backend(&self) -> Backend {
        Backend::Crypto
    }

    async fn current_price(&self, identifier: &str) -> Result<f64, CoreError> {
        let url = format!("{BASE_URL}/simple/price?ids={identifier}&vs_currencies=usd");

        let body = self.client.get(&url).send().await?.text().await?;
        Self::parse_simple_price(&body, identifier)
    }

    async fn history(
        &self,
        identifier: &str,
        horizon: Horizon,
    ) -> Result<Vec<PricePoint>, CoreError> {
        // The horizon is forwarded verbatim ("30" or "max") — no clamping
        // against CoinGecko's own caps.
        let days = horizon.days_query();
        let url = format!(
            "{BASE_URL}/coins/{identifier}/market_chart?vs_currency=usd&days={days}&interval=daily"
        );

        let body = self.client.get(&url).send().await?.text().await?;
        Self::parse_market_chart(&body)
    }
}
