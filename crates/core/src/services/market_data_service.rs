use crate::errors::CoreError;
use crate::models::asset::{AssetRecord, Backend};
use crate::models::price::{Horizon, PriceQuote, PriceSeries};
use crate::providers::registry::ProviderRegistry;

/// The adapter boundary between tracked records and the external price
/// APIs.
///
/// Every fetch failure — network, malformed payload, missing field —
/// collapses here into an absent `PriceQuote` or empty `PriceSeries`,
/// with the reason kept as a diagnostic string and mirrored to the `log`
/// facade. Nothing past this boundary ever sees a transport error, and
/// callers must treat absent/empty as a displayable state rather than
/// retry.
///
/// Holds no mutable state, so independent records can be fetched
/// concurrently from separate tasks without coordination.
pub struct MarketDataService {
    registry: ProviderRegistry,
}

impl MarketDataService {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn new_with_defaults() -> Self {
        Self::new(ProviderRegistry::new_with_defaults())
    }

    /// Whether a provider is registered for the given backend.
    pub fn has_provider_for(&self, backend: Backend) -> bool {
        self.registry.has_provider_for(backend)
    }

    /// Names of all registered providers.
    pub fn provider_names(&self) -> Vec<String> {
        self.registry.provider_names()
    }

    /// Fetch the current price of a record. Single attempt; any failure
    /// (or a non-finite / non-positive price) yields an absent quote.
    pub async fn current_price(&self, record: &AssetRecord) -> PriceQuote {
        let Some(provider) = self.registry.provider_for(record.backend) else {
            let err = CoreError::NoProvider(record.backend.to_string());
            log::warn!("{}: {err}", record.display_symbol);
            return PriceQuote::unavailable(err.to_string());
        };

        match provider.current_price(&record.identifier).await {
            Ok(price) if price.is_finite() && price > 0.0 => PriceQuote::available(price),
            Ok(price) => {
                let diag = format!(
                    "{} returned invalid price {price} for {}",
                    provider.name(),
                    record.identifier
                );
                log::warn!("{}: {diag}", record.display_symbol);
                PriceQuote::unavailable(diag)
            }
            Err(e) => {
                let diag = format!("Failed to fetch price for {}: {e}", record.display_symbol);
                log::warn!("{diag}");
                PriceQuote::unavailable(diag)
            }
        }
    }

    /// Fetch the daily closing-price history of a record over `horizon`.
    /// Any failure yields an empty series — callers treat empty as
    /// "no chart", not an error.
    pub async fn fetch_history(&self, record: &AssetRecord, horizon: Horizon) -> PriceSeries {
        let Some(provider) = self.registry.provider_for(record.backend) else {
            let err = CoreError::NoProvider(record.backend.to_string());
            log::warn!("{}: {err}", record.display_symbol);
            return PriceSeries::empty();
        };

        match provider.history(&record.identifier, horizon).await {
            Ok(points) => PriceSeries::from_points(points),
            Err(e) => {
                log::warn!(
                    "Failed to fetch {horizon} history for {}: {e}",
                    record.display_symbol
                );
                PriceSeries::empty()
            }
        }
    }
}
