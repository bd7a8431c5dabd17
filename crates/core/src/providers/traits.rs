use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Backend;
use crate::models::price::{Horizon, PricePoint};

/// Trait abstraction over market-data backends.
///
/// Each backend (CoinGecko for crypto, Yahoo Finance for equities)
/// implements this trait. Providers return typed errors; collapsing
/// those into absent quotes / empty series happens one layer up, in
/// `MarketDataService` — providers themselves never print or log.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider (for diagnostics).
    fn name(&self) -> &str;

    /// Which backend this provider resolves identifiers for.
    fn backend(&self) -> Backend;

    /// Current (last-traded) price of an asset in USD.
    /// Single attempt, no retry — the transport timeout is the only bound.
    async fn current_price(&self, identifier: &str) -> Result<f64, CoreError>;

    /// Daily closing prices over the requested horizon, in chronological
    /// ascending order.
    async fn history(
        &self,
        identifier: &str,
        horizon: Horizon,
    ) -> Result<Vec<PricePoint>, CoreError>;
}
