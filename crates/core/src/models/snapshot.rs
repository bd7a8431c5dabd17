use serde::{Deserialize, Serialize};

use super::asset::AssetRecord;
use super::metrics::PortfolioMetrics;
use super::price::PriceQuote;

/// One record's combined refresh result: the quote, the derived metrics
/// (when purchase data exists and the quote succeeded), and the deep
/// link to the provider's full chart.
///
/// The core produces these — the frontend just renders one row per snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    /// The tracked record this snapshot was taken for
    pub record: AssetRecord,

    /// Current price lookup result (absent on failure)
    pub quote: PriceQuote,

    /// Gain/loss metrics — `None` for quote-only records or failed quotes
    pub metrics: Option<PortfolioMetrics>,

    /// Link to the provider's interactive chart for this asset
    pub chart_url: String,
}
