pub mod market_data_service;
pub mod metrics_service;
