use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use log::debug;

use crate::errors::{Error, Result};
use crate::stocks::Symbol;

use super::ClientIdentity;

#[derive(Default)]
struct LedgerInner {
    /// Like count per symbol.
    counts: HashMap<Symbol, u64>,
    /// Symbols each client has already liked.
    liked: HashMap<ClientIdentity, HashSet<Symbol>>,
}

/// In-memory like counter store with per-client deduplication.
///
/// Created empty at process start and shared across all concurrent requests;
/// never persisted. For a fixed symbol the count equals the number of
/// distinct clients that have ever liked it, so it is monotonically
/// non-decreasing over the process lifetime.
///
/// The check-then-increment sequence for a (client, symbol) pair runs under
/// the write lock as a single critical section, so two concurrent likes from
/// the same client cannot double count.
#[derive(Default)]
pub struct LikeLedger {
    inner: RwLock<LedgerInner>,
}

impl LikeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current like count for a symbol. Never-liked symbols report 0.
    pub fn current_count(&self, symbol: &Symbol) -> Result<u64> {
        let inner = self
            .inner
            .read()
            .map_err(|e| Error::Ledger(e.to_string()))?;
        Ok(inner.counts.get(symbol).copied().unwrap_or(0))
    }

    /// Register a like for `symbol` on behalf of `client`, unless that client
    /// already liked it. Returns the post-update count.
    ///
    /// With `like_requested` false this is a pure read; a repeat like from
    /// the same client is a no-op, not an error.
    pub fn register_like_if_requested(
        &self,
        symbol: &Symbol,
        client: &ClientIdentity,
        like_requested: bool,
    ) -> Result<u64> {
        if !like_requested {
            return self.current_count(symbol);
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|e| Error::Ledger(e.to_string()))?;

        let already_liked = inner
            .liked
            .get(client)
            .map(|symbols| symbols.contains(symbol))
            .unwrap_or(false);

        if !already_liked {
            *inner.counts.entry(symbol.clone()).or_insert(0) += 1;
            inner
                .liked
                .entry(client.clone())
                .or_default()
                .insert(symbol.clone());
            debug!("registered like for {}", symbol);
        }

        Ok(inner.counts.get(symbol).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn symbol(s: &str) -> Symbol {
        Symbol::parse(s).unwrap()
    }

    #[test]
    fn test_never_liked_symbol_counts_zero() {
        let ledger = LikeLedger::new();
        assert_eq!(ledger.current_count(&symbol("TSLA")).unwrap(), 0);
    }

    #[test]
    fn test_non_like_requests_do_not_mutate() {
        let ledger = LikeLedger::new();
        let client = ClientIdentity::from_address("10.0.0.1");
        for _ in 0..3 {
            let count = ledger
                .register_like_if_requested(&symbol("TSLA"), &client, false)
                .unwrap();
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_repeat_like_from_same_client_is_noop() {
        let ledger = LikeLedger::new();
        let client = ClientIdentity::from_address("10.0.0.1");
        let tsla = symbol("TSLA");

        assert_eq!(
            ledger
                .register_like_if_requested(&tsla, &client, true)
                .unwrap(),
            1
        );
        assert_eq!(
            ledger
                .register_like_if_requested(&tsla, &client, true)
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_distinct_clients_each_count_once() {
        let ledger = LikeLedger::new();
        let tsla = symbol("TSLA");
        let a = ClientIdentity::from_address("10.0.0.1");
        let b = ClientIdentity::from_address("10.0.0.2");

        ledger.register_like_if_requested(&tsla, &a, true).unwrap();
        let count = ledger.register_like_if_requested(&tsla, &b, true).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_likes_are_per_symbol() {
        let ledger = LikeLedger::new();
        let client = ClientIdentity::from_address("10.0.0.1");

        ledger
            .register_like_if_requested(&symbol("TSLA"), &client, true)
            .unwrap();
        let gold = ledger
            .register_like_if_requested(&symbol("GOLD"), &client, true)
            .unwrap();
        assert_eq!(gold, 1);
        assert_eq!(ledger.current_count(&symbol("TSLA")).unwrap(), 1);
    }

    #[test]
    fn test_concurrent_same_client_likes_count_once() {
        let ledger = Arc::new(LikeLedger::new());
        let client = ClientIdentity::from_address("10.0.0.1");
        let tsla = symbol("TSLA");

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                let client = client.clone();
                let tsla = tsla.clone();
                std::thread::spawn(move || {
                    ledger
                        .register_like_if_requested(&tsla, &client, true)
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.current_count(&tsla).unwrap(), 1);
    }
}
