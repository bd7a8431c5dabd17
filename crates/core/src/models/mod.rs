pub mod asset;
pub mod metrics;
pub mod price;
pub mod snapshot;
