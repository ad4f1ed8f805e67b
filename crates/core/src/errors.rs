use thiserror::Error;

use stockpulse_market_data::QuoteSourceError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the stock quote & like service.
#[derive(Error, Debug)]
pub enum Error {
    /// The request carried no stock symbols at all.
    #[error("No stock symbols provided")]
    MissingSymbols,

    /// The request carried more symbols than the endpoint supports.
    #[error("Too many stock symbols: expected 1 or 2, got {0}")]
    TooManySymbols(usize),

    /// A symbol failed normalization (empty, too long, or bad characters).
    #[error("Invalid stock symbol: {0}")]
    InvalidSymbol(String),

    /// The quote source could not produce a price for a symbol.
    #[error("Lookup failed for {symbol}: {source}")]
    Lookup {
        /// The normalized symbol that failed
        symbol: String,
        /// The underlying quote source failure
        #[source]
        source: QuoteSourceError,
    },

    /// The like ledger lock was poisoned.
    #[error("Like ledger unavailable: {0}")]
    Ledger(String),
}

impl Error {
    /// Whether the error was caused by the request rather than the service.
    ///
    /// Client faults map to HTTP 400; everything else is a 500 whose detail
    /// stays in the log.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::MissingSymbols
                | Self::TooManySymbols(_)
                | Self::InvalidSymbol(_)
                | Self::Lookup { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_symbols_message() {
        assert_eq!(
            format!("{}", Error::MissingSymbols),
            "No stock symbols provided"
        );
    }

    #[test]
    fn test_lookup_error_names_the_symbol() {
        let error = Error::Lookup {
            symbol: "ZZZZ".to_string(),
            source: QuoteSourceError::SymbolNotFound("ZZZZ".to_string()),
        };
        assert!(format!("{}", error).contains("ZZZZ"));
        assert!(error.is_client_fault());
    }

    #[test]
    fn test_ledger_error_is_server_fault() {
        assert!(!Error::Ledger("poisoned".to_string()).is_client_fault());
    }
}
