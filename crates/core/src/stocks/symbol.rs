use std::fmt;

use serde::Serialize;

use crate::errors::{Error, Result};

const MAX_SYMBOL_LEN: usize = 12;

/// Normalized stock ticker string, the ledger's key.
///
/// Normalization trims whitespace and uppercases, so differently-cased
/// inputs for the same security collapse to one counter. After
/// normalization a symbol is non-empty, at most 12 characters, and limited
/// to ASCII alphanumerics plus '.' and '-'.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Normalize and validate a raw symbol string.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() || normalized.len() > MAX_SYMBOL_LEN {
            return Err(Error::InvalidSymbol(raw.trim().to_string()));
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(Error::InvalidSymbol(normalized));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ordered symbols of a single request: exactly one or two.
///
/// Parsing rejects zero and more-than-two up front, so everything past the
/// HTTP layer works with a known-good fixed-size sequence in request order.
#[derive(Clone, Debug)]
pub enum RequestedSymbols {
    One(Symbol),
    Two(Symbol, Symbol),
}

impl RequestedSymbols {
    /// Parse the raw `stock` query values in the order they appeared.
    pub fn parse<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = raw.into_iter().collect();
        match raw.as_slice() {
            [] => Err(Error::MissingSymbols),
            [only] => Ok(Self::One(Symbol::parse(only.as_ref())?)),
            [first, second] => Ok(Self::Two(
                Symbol::parse(first.as_ref())?,
                Symbol::parse(second.as_ref())?,
            )),
            more => Err(Error::TooManySymbols(more.len())),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
