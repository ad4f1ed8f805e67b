//! Error types for quote source lookups.

use thiserror::Error;

/// Errors a quote source can produce for a single symbol lookup.
///
/// Lookups are batched by the caller; each variant describes why one symbol
/// failed without implying anything about its siblings.
#[derive(Error, Debug)]
pub enum QuoteSourceError {
    /// The quote source does not know the symbol.
    #[error("Stock symbol not found: {0}")]
    SymbolNotFound(String),

    /// The quote source answered, but with a price that failed validation
    /// (missing, negative, or not a number).
    #[error("Invalid price for {symbol}: {message}")]
    InvalidPrice {
        /// The symbol whose price failed validation
        symbol: String,
        /// Description of the validation failure
        message: String,
    },

    /// The lookup did not complete within the configured deadline.
    #[error("Timed out fetching quote for {symbol}")]
    Timeout {
        /// The symbol whose lookup timed out
        symbol: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
