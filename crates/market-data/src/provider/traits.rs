//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::QuoteSourceError;
use crate::models::StockQuote;

/// Trait for quote sources.
///
/// Implement this trait to back the stock-prices service with a new quote
/// source. The caller hands in an already-normalized symbol (trimmed,
/// uppercased); the provider returns the latest price or a per-symbol error.
/// Implementations must not panic on malformed payloads - every failure mode
/// maps to a [`QuoteSourceError`] variant.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "FCC_PROXY" or "FIXED".
    /// Used for logging and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a normalized symbol.
    async fn get_latest_quote(&self, symbol: &str) -> Result<StockQuote, QuoteSourceError>;
}
