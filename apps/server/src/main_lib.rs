use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use stockpulse_core::{LikeLedger, StockService};
use stockpulse_market_data::{FccProxyProvider, FixedQuoteProvider, QuoteProvider};

use crate::config::{Config, QuoteSource};

pub struct AppState {
    pub stock_service: Arc<StockService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider: Arc<dyn QuoteProvider> = match config.quote_source {
        QuoteSource::Fixed => Arc::new(FixedQuoteProvider::new()),
        QuoteSource::Proxy => match &config.quote_proxy_url {
            Some(url) => Arc::new(FccProxyProvider::with_base_url(url.clone())),
            None => Arc::new(FccProxyProvider::new()),
        },
    };
    let ledger = Arc::new(LikeLedger::new());
    let stock_service =
        Arc::new(StockService::new(provider, ledger).with_lookup_timeout(config.lookup_timeout));

    Arc::new(AppState { stock_service })
}
