//! Stockpulse Core Crate
//!
//! Domain layer of the stock quote & like service:
//!
//! - [`likes`] - the in-memory like ledger and client identity derivation
//! - [`stocks`] - symbol normalization, batch quote resolution and response
//!   assembly
//! - [`errors`] - the root error type
//!
//! The HTTP layer hands a parsed [`stocks::StockPricesRequest`] to a
//! [`stocks::StockService`]; everything below that point is transport
//! agnostic.

pub mod errors;
pub mod likes;
pub mod stocks;

pub use errors::{Error, Result};
pub use likes::{ClientIdentity, LikeLedger};
pub use stocks::{
    PairedStock, RequestedSymbols, SingleStock, StockData, StockPricesRequest, StockService,
    Symbol,
};
