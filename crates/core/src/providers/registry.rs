use crate::models::asset::Backend;

use super::coingecko::CoinGeckoProvider;
use super::traits::PriceProvider;
use super::yahoo_finance::YahooFinanceProvider;

/// Registry of available price providers, keyed by backend.
///
/// Routes each lookup to the provider that handles the record's backend.
/// New backends can be added by registering another provider — nothing
/// else in the codebase changes.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn PriceProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the default providers pre-configured:
    /// CoinGecko for crypto, Yahoo Finance for equities.
    pub fn new_with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(CoinGeckoProvider::new()));

        if let Ok(yahoo) = YahooFinanceProvider::new() {
            registry.register(Box::new(yahoo));
        }

        registry
    }

    /// Register a price provider. Later registrations for the same
    /// backend are shadowed by earlier ones.
    pub fn register(&mut self, provider: Box<dyn PriceProvider>) {
        self.providers.push(provider);
    }

    /// Find the provider that handles the given backend.
    pub fn provider_for(&self, backend: Backend) -> Option<&dyn PriceProvider> {
        self.providers
            .iter()
            .find(|p| p.backend() == backend)
            .map(|p| p.as_ref())
    }

    /// Whether a provider is registered for the given backend.
    pub fn has_provider_for(&self, backend: Backend) -> bool {
        self.provider_for(backend).is_some()
    }

    /// Names of all registered providers, in registration order.
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
