use serde::{Deserialize, Serialize};

/// Direction of the profit/loss figure for display purposes.
///
/// `Gain` and `Loss` use strict comparison against zero; a profit/loss
/// of exactly zero is `Flat` rather than either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Gain,
    Loss,
    Flat,
}

/// Unrealized gain/loss metrics for one position, derived from the
/// current price and the record's purchase data.
///
/// Recomputed on every call, never cached. Only defined when the record
/// carries complete purchase data — see `MetricsService::compute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Percentage change since purchase: (current − purchase) / purchase × 100
    pub variation_pct: f64,

    /// Current price × quantity
    pub current_value: f64,

    /// Purchase price × quantity
    pub cost_basis: f64,

    /// current_value − cost_basis
    pub profit_loss: f64,
}

impl PortfolioMetrics {
    /// Whether the position is up since purchase (strictly positive
    /// variation — a flat position is not a gain).
    pub fn is_gain(&self) -> bool {
        self.variation_pct > 0.0
    }

    /// Three-state direction of the profit/loss figure.
    pub fn trend(&self) -> Trend {
        if self.profit_loss > 0.0 {
            Trend::Gain
        } else if self.profit_loss < 0.0 {
            Trend::Loss
        } else {
            Trend::Flat
        }
    }
}
