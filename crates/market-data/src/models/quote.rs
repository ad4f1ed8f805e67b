use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock quote as supplied by a quote source.
///
/// Produced fresh per lookup and never cached beyond the request that asked
/// for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StockQuote {
    /// The symbol the quote is for, as echoed by the source.
    pub symbol: String,

    /// Latest traded price. Non-negative; validated at the provider boundary.
    pub latest_price: Decimal,
}

impl StockQuote {
    pub fn new(symbol: impl Into<String>, latest_price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            latest_price,
        }
    }
}
