//! Fixed in-memory quote provider.
//!
//! Serves quotes from a static symbol table. Used by the test suites and
//! selectable in configuration for offline runs.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::QuoteSourceError;
use crate::models::StockQuote;
use crate::provider::QuoteProvider;

const PROVIDER_ID: &str = "FIXED";

/// Quote provider backed by a fixed symbol -> price table.
pub struct FixedQuoteProvider {
    quotes: HashMap<String, Decimal>,
}

impl Default for FixedQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedQuoteProvider {
    /// Create a provider with the default symbol table.
    pub fn new() -> Self {
        let mut quotes = HashMap::new();
        quotes.insert("TSLA".to_string(), Decimal::new(65025, 2));
        quotes.insert("GOLD".to_string(), Decimal::new(180075, 2));
        quotes.insert("AMZN".to_string(), Decimal::new(345050, 2));
        quotes.insert("T".to_string(), Decimal::new(3000, 2));
        Self { quotes }
    }

    /// Create a provider from an explicit symbol table.
    pub fn with_quotes(quotes: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        Self {
            quotes: quotes.into_iter().collect(),
        }
    }
}

#[async_trait]
impl QuoteProvider for FixedQuoteProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<StockQuote, QuoteSourceError> {
        debug!("fixed quote lookup for {}", symbol);
        match self.quotes.get(symbol) {
            Some(price) => Ok(StockQuote::new(symbol, *price)),
            None => Err(QuoteSourceError::SymbolNotFound(symbol.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_known_symbol_resolves() {
        let provider = FixedQuoteProvider::new();
        let quote = provider.get_latest_quote("TSLA").await.unwrap();
        assert_eq!(quote.symbol, "TSLA");
        assert_eq!(quote.latest_price, dec!(650.25));
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_not_found() {
        let provider = FixedQuoteProvider::new();
        let err = provider.get_latest_quote("ZZZZ").await.unwrap_err();
        assert!(matches!(err, QuoteSourceError::SymbolNotFound(s) if s == "ZZZZ"));
    }

    #[tokio::test]
    async fn test_custom_table() {
        let provider =
            FixedQuoteProvider::with_quotes([("MSFT".to_string(), dec!(420.69))]);
        let quote = provider.get_latest_quote("MSFT").await.unwrap();
        assert_eq!(quote.latest_price, dec!(420.69));
        assert!(provider.get_latest_quote("TSLA").await.is_err());
    }
}
