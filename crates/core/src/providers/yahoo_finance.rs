use async_trait::async_trait;
use chrono::NaiveDate;

use super::traits::PriceProvider;
use crate::errors::CoreError;
use crate::models::asset::Backend;
use crate::models::price::{Horizon, PricePoint};

/// Yahoo Finance API provider for stock/equity prices.
///
/// - **Free**: No API key required (unofficial public API).
/// - **Identifiers**: ticker symbols including exchange suffixes
///   ("PETR4.SA", "AAPL"), passed through unmodified.
/// - **Data**: last-traded price + daily close history.
///
/// Uses the `yahoo_finance_api` crate which wraps Yahoo Finance's public
/// chart endpoints. Prices come back in the listing currency, which for
/// the tracked exchanges is treated as USD-equivalent display values.
pub struct YahooFinanceProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooFinanceProvider {
    pub fn new() -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::new().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Failed to create connector: {e}"),
        })?;
        Ok(Self { connector })
    }

    /// Convert a unix timestamp (seconds) to `chrono::NaiveDate`.
    fn timestamp_to_naive_date(ts: i64) -> Option<NaiveDate> {
        chrono::DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
    }
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    fn backend(&self) -> Backend {
        Backend::Equity
    }

    async fn current_price(&self, identifier: &str) -> Result<f64, CoreError> {
        let resp = self
            .connector
            .get_latest_quotes(identifier, "1d")
            .await
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to fetch latest quote for {identifier}: {e}"),
            })?;

        let quote = resp.last_quote().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("No quote data for {identifier}: {e}"),
        })?;

        // A zero close is Yahoo's placeholder for "no trade data" and is
        // never a valid quote.
        if !quote.close.is_finite() || quote.close == 0.0 {
            return Err(CoreError::PriceNotAvailable {
                symbol: identifier.to_string(),
            });
        }

        Ok(quote.close)
    }

    async fn history(
        &self,
        identifier: &str,
        horizon: Horizon,
    ) -> Result<Vec<PricePoint>, CoreError> {
        // Horizon renders directly as Yahoo's period string ("30d" / "max"),
        // forwarded without clamping.
        let range = horizon.range_query();

        let resp = self
            .connector
            .get_quote_range(identifier, "1d", &range)
            .await
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to fetch {range} history for {identifier}: {e}"),
            })?;

        let quotes = resp.quotes().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Failed to parse quotes for {identifier}: {e}"),
        })?;

        let points: Vec<PricePoint> = quotes
            .iter()
            .filter_map(|q| {
                if !q.close.is_finite() {
                    return None;
                }
                let date = Self::timestamp_to_naive_date(q.timestamp)?;
                Some(PricePoint {
                    date,
                    price: q.close,
                })
            })
            .collect();

        Ok(points)
    }
}
