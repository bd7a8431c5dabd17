use thiserror::Error;

/// Unified error type for the entire asset-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The data-fetch path deliberately does NOT surface these past the
/// service boundary: `MarketDataService` collapses every fetch failure
/// into an absent `PriceQuote` / empty `PriceSeries` so callers can
/// treat "price unavailable" as a first-class displayable state.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No provider registered for backend: {0}")]
    NoProvider(String),

    #[error("Price not available for {symbol}")]
    PriceNotAvailable { symbol: String },

    // ── Registry persistence ────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Record validation failed: {0}")]
    ValidationError(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize: strip query parameters from URLs — reqwest errors
        // often contain the full request URL.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
