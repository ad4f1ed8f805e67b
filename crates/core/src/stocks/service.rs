//! Stock price service.
//!
//! Composes the three steps of a stock-prices request: resolve quotes for
//! the requested symbols, conditionally register likes in the ledger, and
//! assemble the response shape.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::time::timeout;

use stockpulse_market_data::{QuoteProvider, QuoteSourceError, StockQuote};

use crate::errors::{Error, Result};
use crate::likes::{ClientIdentity, LikeLedger};

use super::model::{SingleStock, StockData};
use super::symbol::{RequestedSymbols, Symbol};

/// Default deadline for a single quote lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// A fully parsed stock-prices request.
#[derive(Clone, Debug)]
pub struct StockPricesRequest {
    /// The 1 or 2 normalized symbols, in request order.
    pub symbols: RequestedSymbols,
    /// Whether the request asked to like the symbol(s).
    pub like: bool,
    /// Identity of the requester, for like deduplication.
    pub client: ClientIdentity,
}

/// The quote & like service.
///
/// Holds the quote source and an explicitly injected ledger, so tests can
/// instantiate isolated ledgers per case instead of sharing process globals.
pub struct StockService {
    provider: Arc<dyn QuoteProvider>,
    ledger: Arc<LikeLedger>,
    lookup_timeout: Duration,
}

impl StockService {
    pub fn new(provider: Arc<dyn QuoteProvider>, ledger: Arc<LikeLedger>) -> Self {
        Self {
            provider,
            ledger,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Handle one stock-prices request end to end.
    ///
    /// Quote lookups for a two-symbol request run in parallel and both run
    /// to completion before either failure aborts the batch. All lookups
    /// complete before any ledger mutation, so a failed batch leaves every
    /// symbol's count untouched, including the successful sibling's.
    pub async fn get_stock_prices(&self, request: StockPricesRequest) -> Result<StockData> {
        match &request.symbols {
            RequestedSymbols::One(symbol) => {
                let quote = self.lookup(symbol).await?;
                let likes = self.ledger.register_like_if_requested(
                    symbol,
                    &request.client,
                    request.like,
                )?;
                Ok(StockData::Single(SingleStock {
                    stock: symbol.clone(),
                    price: quote.latest_price,
                    likes,
                }))
            }
            RequestedSymbols::Two(first, second) => {
                let (first_quote, second_quote) =
                    futures::future::join(self.lookup(first), self.lookup(second)).await;
                let first_quote = first_quote?;
                let second_quote = second_quote?;

                let first_likes = self.ledger.register_like_if_requested(
                    first,
                    &request.client,
                    request.like,
                )?;
                let second_likes = self.ledger.register_like_if_requested(
                    second,
                    &request.client,
                    request.like,
                )?;

                Ok(StockData::pair(
                    (first.clone(), first_quote.latest_price, first_likes),
                    (second.clone(), second_quote.latest_price, second_likes),
                ))
            }
        }
    }

    /// Resolve one symbol against the quote source under the lookup deadline.
    async fn lookup(&self, symbol: &Symbol) -> Result<StockQuote> {
        let result = match timeout(
            self.lookup_timeout,
            self.provider.get_latest_quote(symbol.as_str()),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(QuoteSourceError::Timeout {
                symbol: symbol.to_string(),
            }),
        };

        result.map_err(|source| {
            debug!("quote lookup failed for {}: {}", symbol, source);
            Error::Lookup {
                symbol: symbol.to_string(),
                source,
            }
        })
    }
}
