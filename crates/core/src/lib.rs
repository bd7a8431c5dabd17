pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{
    asset::{AssetRecord, Backend},
    metrics::PortfolioMetrics,
    price::{Horizon, PriceQuote, PriceSeries},
    snapshot::AssetSnapshot,
};
use providers::registry::ProviderRegistry;
use services::{market_data_service::MarketDataService, metrics_service::MetricsService};
use storage::{registry_file::RegistryFile, store::RegistryStore};

use errors::CoreError;

/// Main entry point for the Asset Tracker core library.
///
/// Owns the list of tracked records and the services that operate on
/// them. Presentation layers (terminal menus, GUI windows, chart
/// widgets) call into this facade and render whatever comes back —
/// the core never prints.
#[must_use]
pub struct AssetTracker {
    records: Vec<AssetRecord>,
    market_data: MarketDataService,
    metrics_service: MetricsService,
    /// Tracks whether the record list changed since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for AssetTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetTracker")
            .field("records", &self.records.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl AssetTracker {
    /// Create a tracker with no records and the default providers
    /// (CoinGecko + Yahoo Finance).
    pub fn create_new() -> Self {
        Self::build(Vec::new(), ProviderRegistry::new_with_defaults())
    }

    /// Create a tracker pre-loaded with the default starter portfolio.
    pub fn seeded() -> Self {
        Self::build(
            RegistryFile::seed().into_records(),
            ProviderRegistry::new_with_defaults(),
        )
    }

    /// Create a tracker over an explicit record list. Each record is
    /// validated as if added through `add_record`.
    pub fn with_records(records: Vec<AssetRecord>) -> Result<Self, CoreError> {
        let mut tracker = Self::create_new();
        for record in records {
            tracker.add_record(record)?;
        }
        tracker.dirty = false;
        Ok(tracker)
    }

    /// Create an empty tracker with a custom provider registry
    /// (mock providers in tests, alternative APIs, etc.).
    pub fn with_registry(registry: ProviderRegistry) -> Self {
        Self::build(Vec::new(), registry)
    }

    /// Load tracked records from a registry JSON file on disk.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let records = RegistryStore::load_from_path(path)?;
        Ok(Self::build(records, ProviderRegistry::new_with_defaults()))
    }

    /// Save tracked records to a registry JSON file on disk.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), CoreError> {
        RegistryStore::save_to_path(path, &self.records)?;
        self.dirty = false;
        Ok(())
    }

    /// Load tracked records from a registry JSON string.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let records = RegistryStore::from_json(json)?;
        Ok(Self::build(records, ProviderRegistry::new_with_defaults()))
    }

    /// Serialize tracked records to a registry JSON string.
    pub fn to_json(&self) -> Result<String, CoreError> {
        RegistryStore::to_json(&self.records)
    }

    // ── Record Management ───────────────────────────────────────────

    /// Add a record to the tracker.
    ///
    /// Rejects empty identifiers, non-positive quantity or purchase
    /// price, and duplicate (identifier, backend) pairs. A partial
    /// purchase-field set is allowed — the record simply behaves as
    /// quote-only.
    pub fn add_record(&mut self, record: AssetRecord) -> Result<(), CoreError> {
        Self::validate_record(&record)?;

        let duplicate = self
            .records
            .iter()
            .any(|r| r.identifier == record.identifier && r.backend == record.backend);
        if duplicate {
            return Err(CoreError::ValidationError(format!(
                "Record for {} ({}) already exists",
                record.identifier, record.backend
            )));
        }

        self.records.push(record);
        self.dirty = true;
        Ok(())
    }

    /// Remove a record by identifier and backend.
    pub fn remove_record(&mut self, identifier: &str, backend: Backend) -> Result<AssetRecord, CoreError> {
        let idx = self
            .records
            .iter()
            .position(|r| r.identifier == identifier && r.backend == backend)
            .ok_or_else(|| CoreError::RecordNotFound(identifier.to_string()))?;

        let removed = self.records.remove(idx);
        self.dirty = true;
        Ok(removed)
    }

    /// All tracked records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    /// Records tracked against a specific backend.
    #[must_use]
    pub fn records_for_backend(&self, backend: Backend) -> Vec<&AssetRecord> {
        self.records
            .iter()
            .filter(|r| r.backend == backend)
            .collect()
    }

    /// Find a record by identifier and backend.
    #[must_use]
    pub fn find_record(&self, identifier: &str, backend: Backend) -> Option<&AssetRecord> {
        self.records
            .iter()
            .find(|r| r.identifier == identifier && r.backend == backend)
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    // ── Prices & Metrics ────────────────────────────────────────────

    /// Current price of a record. Absent on any fetch failure — the
    /// diagnostic on the quote says why.
    pub async fn current_price(&self, record: &AssetRecord) -> PriceQuote {
        self.market_data.current_price(record).await
    }

    /// Daily closing-price history over `horizon`. Empty on failure.
    pub async fn fetch_history(&self, record: &AssetRecord, horizon: Horizon) -> PriceSeries {
        self.market_data.fetch_history(record, horizon).await
    }

    /// Gain/loss metrics for a record at a given current price, or
    /// `None` when the record has no complete purchase data.
    #[must_use]
    pub fn metrics(&self, current_price: f64, record: &AssetRecord) -> Option<PortfolioMetrics> {
        self.metrics_service.compute(current_price, record)
    }

    /// One-call refresh for a single record: current price, derived
    /// metrics, and the chart deep link.
    pub async fn snapshot(&self, record: &AssetRecord) -> AssetSnapshot {
        let quote = self.market_data.current_price(record).await;
        let metrics = quote
            .value
            .and_then(|price| self.metrics_service.compute(price, record));

        AssetSnapshot {
            record: record.clone(),
            quote,
            metrics,
            chart_url: record.chart_url(),
        }
    }

    /// Refresh every tracked record sequentially. Each lookup is
    /// independent — one asset failing does not affect the others.
    pub async fn refresh_all(&self) -> Vec<AssetSnapshot> {
        let mut snapshots = Vec::with_capacity(self.records.len());
        for record in &self.records {
            snapshots.push(self.snapshot(record).await);
        }
        snapshots
    }

    // ── Provider Availability ───────────────────────────────────────

    /// Check whether a price provider is registered for a backend.
    #[must_use]
    pub fn is_provider_available(&self, backend: Backend) -> bool {
        self.market_data.has_provider_for(backend)
    }

    /// Names of all registered providers.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.market_data.provider_names()
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if records changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(records: Vec<AssetRecord>, registry: ProviderRegistry) -> Self {
        Self {
            records,
            market_data: MarketDataService::new(registry),
            metrics_service: MetricsService::new(),
            dirty: false,
        }
    }

    fn validate_record(record: &AssetRecord) -> Result<(), CoreError> {
        if record.identifier.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Record identifier must not be empty".into(),
            ));
        }
        if let Some(quantity) = record.quantity {
            if !quantity.is_finite() || quantity <= 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Quantity for {} must be a positive number, got {quantity}",
                    record.identifier
                )));
            }
        }
        if let Some(price) = record.purchase_price {
            if !price.is_finite() || price <= 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Purchase price for {} must be a positive number, got {price}",
                    record.identifier
                )));
            }
        }
        Ok(())
    }
}
