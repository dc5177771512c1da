pub mod traits;

// Feed implementations
pub mod binance;
pub mod er_api;
