use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single price data point (date → price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Result of a current-price lookup.
///
/// An absent `value` signals a failed or unavailable lookup — never zero.
/// The optional `diagnostic` carries the human-readable failure reason;
/// whether to print it, show a dialog, or drop it is the caller's choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub value: Option<f64>,
    #[serde(default)]
    pub diagnostic: Option<String>,
}

impl PriceQuote {
    pub fn available(value: f64) -> Self {
        Self {
            value: Some(value),
            diagnostic: None,
        }
    }

    pub fn unavailable(diagnostic: impl Into<String>) -> Self {
        Self {
            value: None,
            diagnostic: Some(diagnostic.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

/// Result of a historical lookup: daily closing prices in chronological
/// ascending order. An empty series signals unavailable data and is a
/// first-class "no chart" state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from points, sorting by date to guarantee
    /// chronological ascending order regardless of API response order.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Price values only, in chronological order (for plotting).
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point, if any.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

/// Requested length of historical data: a day count, or everything the
/// backend has. Passed through to the API verbatim — the core performs
/// no clamping against backend-specific caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    Days(u32),
    Max,
}

impl Horizon {
    /// Value for CoinGecko's `days=` query parameter ("30" or "max").
    pub fn days_query(&self) -> String {
        match self {
            Horizon::Days(n) => n.to_string(),
            Horizon::Max => "max".to_string(),
        }
    }

    /// Value for Yahoo's period range string ("30d" or "max").
    pub fn range_query(&self) -> String {
        match self {
            Horizon::Days(n) => format!("{n}d"),
            Horizon::Max => "max".to_string(),
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Horizon::Days(n) => write!(f, "{n} days"),
            Horizon::Max => write!(f, "maximum available"),
        }
    }
}
