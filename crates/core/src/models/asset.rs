use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The market backend a tracked asset is resolved against.
/// Fixed at record creation — determines which price provider applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backend {
    /// Equities (PETR4.SA, AAPL, etc.) — resolved via Yahoo Finance
    Equity,
    /// Cryptocurrencies (bitcoin, ethereum, etc.) — resolved via CoinGecko
    Crypto,
}

impl Backend {
    /// Web deep link to the provider's full interactive chart for an asset.
    pub fn chart_url(&self, identifier: &str) -> String {
        match self {
            Backend::Equity => {
                format!("https://finance.yahoo.com/quote/{identifier}/chart?p={identifier}")
            }
            Backend::Crypto => format!("https://www.coingecko.com/en/coins/{identifier}"),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Equity => write!(f, "Equity"),
            Backend::Crypto => write!(f, "Crypto"),
        }
    }
}

/// A complete set of purchase data for one position.
///
/// Only materialized when purchase date, quantity, AND price are all
/// present on the record — a partial set behaves as if no purchase data
/// was provided at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Purchase {
    pub date: NaiveDate,
    pub quantity: f64,
    pub price: f64,
}

/// One tracked position: an asset identifier bound to a backend, with
/// optional purchase metadata.
///
/// `identifier` is backend-specific and immutable once created: a ticker
/// with exchange suffix for equities ("PETR4.SA"), a lowercase slug for
/// crypto ("bitcoin"). Records without complete purchase data are
/// "quote-only" lookups — no portfolio metrics are computed for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Backend-specific identifier, passed through to the API unmodified
    pub identifier: String,

    /// Short human-readable label (e.g., "BTC", "Petrobras")
    pub display_symbol: String,

    /// Optional long name (e.g., "Bitcoin")
    #[serde(default)]
    pub name: Option<String>,

    /// Which market backend resolves this identifier
    pub backend: Backend,

    /// Purchase date, if the position was bought
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    /// Quantity held (positive), paired with date and price
    #[serde(default)]
    pub quantity: Option<f64>,

    /// Purchase price per unit in USD (positive)
    #[serde(default)]
    pub purchase_price: Option<f64>,
}

impl AssetRecord {
    /// Create a quote-only record (no purchase data).
    pub fn new(
        identifier: impl Into<String>,
        display_symbol: impl Into<String>,
        backend: Backend,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_symbol: display_symbol.into(),
            name: None,
            backend,
            purchase_date: None,
            quantity: None,
            purchase_price: None,
        }
    }

    /// Create a record with full purchase metadata.
    pub fn with_purchase(
        identifier: impl Into<String>,
        display_symbol: impl Into<String>,
        backend: Backend,
        purchase_date: NaiveDate,
        quantity: f64,
        purchase_price: f64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_symbol: display_symbol.into(),
            name: None,
            backend,
            purchase_date: Some(purchase_date),
            quantity: Some(quantity),
            purchase_price: Some(purchase_price),
        }
    }

    /// Attach a long display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Complete purchase data, or `None` if any of the three fields is
    /// missing. A partial set is treated as absent, not as an error.
    pub fn purchase(&self) -> Option<Purchase> {
        match (self.purchase_date, self.quantity, self.purchase_price) {
            (Some(date), Some(quantity), Some(price)) => Some(Purchase {
                date,
                quantity,
                price,
            }),
            _ => None,
        }
    }

    /// Whether this record is a bare price lookup with no position attached.
    pub fn is_quote_only(&self) -> bool {
        self.purchase().is_none()
    }

    /// Deep link to the provider's full interactive chart.
    pub fn chart_url(&self) -> String {
        self.backend.chart_url(&self.identifier)
    }
}
