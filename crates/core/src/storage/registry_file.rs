use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::asset::{AssetRecord, Backend};

/// On-disk schema of the asset registry: a JSON document with two
/// top-level arrays, `stocks` and `cryptos`, using source-specific keys
/// (`ticker` vs `id`, `symbol` for crypto only).
///
/// The core never reads this shape directly — it consumes `AssetRecord`s
/// produced by `into_records()`. Purchase fields are individually
/// optional; an incomplete set loads fine and simply yields a
/// quote-only record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub stocks: Vec<StockEntry>,

    #[serde(default)]
    pub cryptos: Vec<CryptoEntry>,
}

/// One equity position in the registry file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Ticker with exchange suffix where applicable (e.g., "PETR4.SA")
    pub ticker: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub purchase_price: Option<f64>,
}

/// One crypto position in the registry file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoEntry {
    /// Lowercase CoinGecko slug (e.g., "bitcoin")
    pub id: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Short ticker label (e.g., "BTC") — crypto only
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub purchase_price: Option<f64>,
}

impl RegistryFile {
    /// The default starter portfolio, used when no registry file exists yet.
    pub fn seed() -> Self {
        Self {
            stocks: vec![
                StockEntry {
                    ticker: "PETR4.SA".into(),
                    display_name: Some("Petrobras".into()),
                    purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15),
                    quantity: Some(100.0),
                    purchase_price: Some(25.0),
                },
                StockEntry {
                    ticker: "ITSA4.SA".into(),
                    display_name: Some("Itausa".into()),
                    purchase_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                    quantity: Some(200.0),
                    purchase_price: Some(9.5),
                },
            ],
            cryptos: vec![
                CryptoEntry {
                    id: "bitcoin".into(),
                    display_name: Some("Bitcoin".into()),
                    symbol: Some("BTC".into()),
                    purchase_date: NaiveDate::from_ymd_opt(2022, 6, 20),
                    quantity: Some(0.05),
                    purchase_price: Some(20000.0),
                },
                CryptoEntry {
                    id: "ethereum".into(),
                    display_name: Some("Ethereum".into()),
                    symbol: Some("ETH".into()),
                    purchase_date: NaiveDate::from_ymd_opt(2023, 11, 10),
                    quantity: Some(0.5),
                    purchase_price: Some(2000.0),
                },
            ],
        }
    }

    /// Flatten both arrays into the core's record type, stocks first.
    pub fn into_records(self) -> Vec<AssetRecord> {
        let mut records = Vec::with_capacity(self.stocks.len() + self.cryptos.len());

        for stock in self.stocks {
            let display_symbol = stock
                .display_name
                .clone()
                .unwrap_or_else(|| stock.ticker.clone());
            records.push(AssetRecord {
                identifier: stock.ticker,
                display_symbol,
                name: stock.display_name,
                backend: Backend::Equity,
                purchase_date: stock.purchase_date,
                quantity: stock.quantity,
                purchase_price: stock.purchase_price,
            });
        }

        for crypto in self.cryptos {
            let display_symbol = crypto
                .symbol
                .clone()
                .unwrap_or_else(|| crypto.id.to_uppercase());
            records.push(AssetRecord {
                identifier: crypto.id,
                display_symbol,
                name: crypto.display_name,
                backend: Backend::Crypto,
                purchase_date: crypto.purchase_date,
                quantity: crypto.quantity,
                purchase_price: crypto.purchase_price,
            });
        }

        records
    }

    /// Split records back into the two on-disk arrays by backend.
    pub fn from_records(records: &[AssetRecord]) -> Self {
        let mut file = Self::default();

        for record in records {
            match record.backend {
                Backend::Equity => file.stocks.push(StockEntry {
                    ticker: record.identifier.clone(),
                    display_name: record
                        .name
                        .clone()
                        .or_else(|| Some(record.display_symbol.clone())),
                    purchase_date: record.purchase_date,
                    quantity: record.quantity,
                    purchase_price: record.purchase_price,
                }),
                Backend::Crypto => file.cryptos.push(CryptoEntry {
                    id: record.identifier.clone(),
                    display_name: record.name.clone(),
                    symbol: Some(record.display_symbol.clone()),
                    purchase_date: record.purchase_date,
                    quantity: record.quantity,
                    purchase_price: record.purchase_price,
                }),
            }
        }

        file
    }
}
