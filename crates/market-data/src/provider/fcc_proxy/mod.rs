//! freeCodeCamp stock quote proxy provider.
//!
//! Fetches latest prices from the public proxy at
//! `https://stock-price-checker-proxy.freecodecamp.rocks` via
//! `GET /v1/stock/{symbol}/quote`. The proxy answers with an IEX-style JSON
//! object for known symbols and a bare JSON string ("Unknown symbol") for
//! unknown ones.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::errors::QuoteSourceError;
use crate::models::StockQuote;
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://stock-price-checker-proxy.freecodecamp.rocks";
const PROVIDER_ID: &str = "FCC_PROXY";

/// Response from /v1/stock/{symbol}/quote.
///
/// The proxy returns many more fields; only the two the service needs are
/// mapped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    symbol: Option<String>,
    latest_price: Option<Decimal>,
}

/// Quote provider backed by the freeCodeCamp stock price proxy.
pub struct FccProxyProvider {
    client: Client,
    base_url: String,
}

impl Default for FccProxyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FccProxyProvider {
    /// Create a provider pointing at the public proxy.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    /// Create a provider pointing at a custom base URL. Used in tests and for
    /// self-hosted proxies.
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the quote endpoint and return the raw body.
    async fn fetch(&self, symbol: &str) -> Result<String, QuoteSourceError> {
        let url = format!("{}/v1/stock/{}/quote", self.base_url, symbol);

        debug!("quote proxy request for {}", symbol);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                QuoteSourceError::Timeout {
                    symbol: symbol.to_string(),
                }
            } else {
                QuoteSourceError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(QuoteSourceError::SymbolNotFound(symbol.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuoteSourceError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| QuoteSourceError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }

    /// Parse a proxy body into a quote, validating the price.
    fn parse_quote(symbol: &str, body: &str) -> Result<StockQuote, QuoteSourceError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| QuoteSourceError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Malformed payload: {}", e),
            })?;

        // Unknown symbols come back as a bare string, not an object.
        if value.is_string() {
            return Err(QuoteSourceError::SymbolNotFound(symbol.to_string()));
        }

        let quote: QuoteResponse =
            serde_json::from_value(value).map_err(|e| QuoteSourceError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Malformed payload: {}", e),
            })?;

        let latest_price = quote
            .latest_price
            .ok_or_else(|| QuoteSourceError::InvalidPrice {
                symbol: symbol.to_string(),
                message: "missing latestPrice".to_string(),
            })?;

        if latest_price < Decimal::ZERO {
            return Err(QuoteSourceError::InvalidPrice {
                symbol: symbol.to_string(),
                message: format!("negative price {}", latest_price),
            });
        }

        Ok(StockQuote::new(
            quote.symbol.unwrap_or_else(|| symbol.to_string()),
            latest_price,
        ))
    }
}

#[async_trait]
impl QuoteProvider for FccProxyProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<StockQuote, QuoteSourceError> {
        let body = self.fetch(symbol).await?;
        Self::parse_quote(symbol, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_known_symbol() {
        let body = r#"{"symbol":"TSLA","latestPrice":650.25,"companyName":"Tesla Inc"}"#;
        let quote = FccProxyProvider::parse_quote("TSLA", body).unwrap();
        assert_eq!(quote.symbol, "TSLA");
        assert_eq!(quote.latest_price, dec!(650.25));
    }

    #[test]
    fn test_parse_unknown_symbol_string_body() {
        let err = FccProxyProvider::parse_quote("ZZZZ", r#""Unknown symbol""#).unwrap_err();
        assert!(matches!(err, QuoteSourceError::SymbolNotFound(s) if s == "ZZZZ"));
    }

    #[test]
    fn test_parse_missing_price() {
        let err = FccProxyProvider::parse_quote("TSLA", r#"{"symbol":"TSLA"}"#).unwrap_err();
        assert!(matches!(err, QuoteSourceError::InvalidPrice { .. }));
    }

    #[test]
    fn test_parse_negative_price() {
        let body = r#"{"symbol":"TSLA","latestPrice":-1.0}"#;
        let err = FccProxyProvider::parse_quote("TSLA", body).unwrap_err();
        assert!(matches!(err, QuoteSourceError::InvalidPrice { .. }));
    }

    #[test]
    fn test_parse_non_numeric_price() {
        let body = r#"{"symbol":"TSLA","latestPrice":"a lot"}"#;
        let err = FccProxyProvider::parse_quote("TSLA", body).unwrap_err();
        assert!(matches!(err, QuoteSourceError::ProviderError { .. }));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = FccProxyProvider::parse_quote("TSLA", "not json").unwrap_err();
        assert!(matches!(err, QuoteSourceError::ProviderError { .. }));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = FccProxyProvider::with_base_url("http://localhost:9999/".to_string());
        assert_eq!(provider.base_url, "http://localhost:9999");
    }
}
