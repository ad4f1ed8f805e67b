//! Stock prices: symbol normalization, quote resolution and response shaping.

pub mod model;
pub mod service;
pub mod symbol;

pub use model::{PairedStock, SingleStock, StockData};
pub use service::{StockPricesRequest, StockService, DEFAULT_LOOKUP_TIMEOUT};
pub use symbol::{RequestedSymbols, Symbol};
