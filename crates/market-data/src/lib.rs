//! Stockpulse Market Data Crate
//!
//! This crate is the quote-source boundary of the stockpulse service: a
//! provider-agnostic interface for fetching the latest price of a stock
//! symbol, plus the two providers the service ships with.
//!
//! # Core Types
//!
//! - [`QuoteProvider`] - the quote source trait the core service consumes
//! - [`StockQuote`] - a (symbol, latest price) pair
//! - [`QuoteSourceError`] - per-symbol lookup failures
//!
//! # Providers
//!
//! - [`FccProxyProvider`] - HTTP client for the freeCodeCamp stock quote proxy
//! - [`FixedQuoteProvider`] - in-memory symbol table for tests and offline runs

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::QuoteSourceError;
pub use models::StockQuote;
pub use provider::fcc_proxy::FccProxyProvider;
pub use provider::fixed::FixedQuoteProvider;
pub use provider::QuoteProvider;
