// ═══════════════════════════════════════════════════════════════════
// Service Tests — MarketDataService collapse semantics, MetricsService
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::NaiveDate;

use asset_tracker_core::errors::CoreError;
use asset_tracker_core::models::asset::{AssetRecord, Backend};
use asset_tracker_core::models::price::{Horizon, PricePoint};
use asset_tracker_core::providers::registry::ProviderRegistry;
use asset_tracker_core::providers::traits::PriceProvider;
use asset_tracker_core::services::market_data_service::MarketDataService;
use asset_tracker_core::services::metrics_service::MetricsService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Providers
// ═══════════════════════════════════════════════════════════════════

/// Returns a fixed price and history for any identifier.
struct FixedProvider {
    backend: Backend,
    price: f64,
    history: Vec<PricePoint>,
}

#[async_trait]
impl PriceProvider for FixedProvider {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn backend(&self) -> Backend {
        self.backend
    }

    async fn current_price(&self, _identifier: &str) -> Result<f64, CoreError> {
        Ok(self.price)
    }

    async fn history(
        &self,
        _identifier: &str,
        _horizon: Horizon,
    ) -> Result<Vec<PricePoint>, CoreError> {
        Ok(self.history.clone())
    }
}

/// Fails every call, simulating a dead API.
struct FailingProvider {
    backend: Backend,
}

#[async_trait]
impl PriceProvider for FailingProvider {
    fn name(&self) -> &str {
        "Failing"
    }

    fn backend(&self) -> Backend {
        self.backend
    }

    async fn current_price(&self, identifier: &str) -> Result<f64, CoreError> {
        Err(CoreError::Api {
            provider: "Failing".into(),
            message: format!("no data for {identifier}"),
        })
    }

    async fn history(
        &self,
        identifier: &str,
        _horizon: Horizon,
    ) -> Result<Vec<PricePoint>, CoreError> {
        Err(CoreError::Network(format!("timed out fetching {identifier}")))
    }
}

fn service_with(provider: Box<dyn PriceProvider>) -> MarketDataService {
    let mut registry = ProviderRegistry::new();
    registry.register(provider);
    MarketDataService::new(registry)
}

fn crypto_record() -> AssetRecord {
    AssetRecord::new("bitcoin", "BTC", Backend::Crypto)
}

// ═══════════════════════════════════════════════════════════════════
// MarketDataService — current price
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn successful_lookup_yields_available_quote() {
    let service = service_with(Box::new(FixedProvider {
        backend: Backend::Crypto,
        price: 65000.0,
        history: vec![],
    }));

    let quote = service.current_price(&crypto_record()).await;
    assert_eq!(quote.value, Some(65000.0));
    assert!(quote.diagnostic.is_none());
}

#[tokio::test]
async fn provider_failure_collapses_to_absent_quote() {
    let service = service_with(Box::new(FailingProvider {
        backend: Backend::Crypto,
    }));

    let quote = service.current_price(&crypto_record()).await;
    assert!(quote.value.is_none());
    let diag = quote.diagnostic.expect("diagnostic carries the reason");
    assert!(diag.contains("BTC"), "diagnostic names the asset: {diag}");
}

#[tokio::test]
async fn zero_price_is_never_a_valid_quote() {
    let service = service_with(Box::new(FixedProvider {
        backend: Backend::Equity,
        price: 0.0,
        history: vec![],
    }));

    let record = AssetRecord::new("PETR4.SA", "Petrobras", Backend::Equity);
    let quote = service.current_price(&record).await;
    assert!(quote.value.is_none());
    assert!(quote.diagnostic.is_some());
}

#[tokio::test]
async fn non_finite_price_collapses_to_absent() {
    for bad in [f64::NAN, f64::INFINITY, -1.0] {
        let service = service_with(Box::new(FixedProvider {
            backend: Backend::Crypto,
            price: bad,
            history: vec![],
        }));
        let quote = service.current_price(&crypto_record()).await;
        assert!(quote.value.is_none(), "price {bad} must be absent");
    }
}

#[tokio::test]
async fn missing_backend_provider_is_absent_not_a_panic() {
    let service = MarketDataService::new(ProviderRegistry::new());
    let quote = service.current_price(&crypto_record()).await;
    assert!(quote.value.is_none());
    assert!(quote
        .diagnostic
        .unwrap()
        .contains("No provider registered"));
}

// ═══════════════════════════════════════════════════════════════════
// MarketDataService — history
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn history_is_sorted_ascending_regardless_of_api_order() {
    let service = service_with(Box::new(FixedProvider {
        backend: Backend::Crypto,
        price: 1.0,
        history: vec![
            PricePoint {
                date: date(2024, 1, 3),
                price: 3.0,
            },
            PricePoint {
                date: date(2024, 1, 1),
                price: 1.0,
            },
            PricePoint {
                date: date(2024, 1, 2),
                price: 2.0,
            },
        ],
    }));

    let series = service
        .fetch_history(&crypto_record(), Horizon::Days(30))
        .await;

    assert_eq!(series.len(), 3);
    assert!(series.len() <= 30);
    let dates: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted, "series must be chronologically ascending");
}

#[tokio::test]
async fn history_failure_collapses_to_empty_series() {
    let service = service_with(Box::new(FailingProvider {
        backend: Backend::Equity,
    }));

    let record = AssetRecord::new("ITSA4.SA", "Itausa", Backend::Equity);
    let series = service.fetch_history(&record, Horizon::Max).await;
    assert!(series.is_empty(), "failure means no chart, not an error");
}

#[tokio::test]
async fn history_without_provider_is_empty() {
    let service = MarketDataService::new(ProviderRegistry::new());
    let series = service
        .fetch_history(&crypto_record(), Horizon::Days(7))
        .await;
    assert!(series.is_empty());
}

// ═══════════════════════════════════════════════════════════════════
// MetricsService
// ═══════════════════════════════════════════════════════════════════

#[test]
fn metrics_for_a_gaining_position() {
    let record = AssetRecord::with_purchase(
        "PETR4.SA",
        "Petrobras",
        Backend::Equity,
        date(2023, 1, 15),
        100.0,
        25.0,
    );

    let metrics = MetricsService::new().compute(30.0, &record).unwrap();
    assert!((metrics.variation_pct - 20.0).abs() < 1e-9);
    assert_eq!(metrics.current_value, 3000.0);
    assert_eq!(metrics.cost_basis, 2500.0);
    assert_eq!(metrics.profit_loss, 500.0);
    assert!(metrics.is_gain());
}

#[test]
fn metrics_for_a_losing_position() {
    let record = AssetRecord::with_purchase(
        "ITSA4.SA",
        "Itausa",
        Backend::Equity,
        date(2024, 3, 1),
        200.0,
        9.5,
    );

    let metrics = MetricsService::new().compute(8.0, &record).unwrap();
    assert!((metrics.variation_pct - (-15.789473684210527)).abs() < 1e-9);
    assert_eq!(metrics.current_value, 1600.0);
    assert_eq!(metrics.cost_basis, 1900.0);
    assert_eq!(metrics.profit_loss, -300.0);
    assert!(!metrics.is_gain());
}

#[test]
fn metrics_not_applicable_without_complete_purchase_data() {
    let service = MetricsService::new();
    let d = Some(date(2023, 1, 15));
    let q = Some(100.0);
    let p = Some(25.0);

    let combos: [(Option<NaiveDate>, Option<f64>, Option<f64>); 7] = [
        (None, None, None),
        (d, None, None),
        (None, q, None),
        (None, None, p),
        (d, q, None),
        (d, None, p),
        (None, q, p),
    ];

    for (purchase_date, quantity, purchase_price) in combos {
        let mut record = AssetRecord::new("bitcoin", "BTC", Backend::Crypto);
        record.purchase_date = purchase_date;
        record.quantity = quantity;
        record.purchase_price = purchase_price;

        assert!(
            service.compute(65000.0, &record).is_none(),
            "({purchase_date:?}, {quantity:?}, {purchase_price:?}) must be not-applicable"
        );
    }
}

#[test]
fn metrics_flat_at_purchase_price() {
    let record = AssetRecord::with_purchase(
        "bitcoin",
        "BTC",
        Backend::Crypto,
        date(2022, 6, 20),
        0.05,
        20000.0,
    );

    let metrics = MetricsService::new().compute(20000.0, &record).unwrap();
    assert_eq!(metrics.variation_pct, 0.0);
    assert_eq!(metrics.profit_loss, 0.0);
    assert!(!metrics.is_gain());
    assert_eq!(
        metrics.trend(),
        asset_tracker_core::models::metrics::Trend::Flat
    );
}
