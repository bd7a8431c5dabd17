use crate::models::asset::AssetRecord;
use crate::models::metrics::PortfolioMetrics;

/// Computes unrealized gain/loss metrics from a current price and a
/// record's purchase data.
///
/// Pure business logic — no I/O, no caching; metrics are recomputed on
/// every call.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Derive metrics for a record at the given current price.
    ///
    /// Returns `None` ("not applicable") when any of purchase date,
    /// quantity, or purchase price is missing — a partial purchase set
    /// never produces a zero-filled result.
    pub fn compute(&self, current_price: f64, record: &AssetRecord) -> Option<PortfolioMetrics> {
        let purchase = record.purchase()?;

        let variation_pct = (current_price - purchase.price) / purchase.price * 100.0;
        let current_value = current_price * purchase.quantity;
        let cost_basis = purchase.price * purchase.quantity;

        Some(PortfolioMetrics {
            variation_pct,
            current_value,
            cost_basis,
            profit_loss: current_value - cost_basis,
        })
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
