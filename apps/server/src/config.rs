use std::{net::SocketAddr, time::Duration};

/// Which quote source backs the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuoteSource {
    /// The freeCodeCamp stock quote proxy.
    Proxy,
    /// The built-in fixed symbol table, for offline runs and tests.
    Fixed,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub quote_source: QuoteSource,
    pub quote_proxy_url: Option<String>,
    pub lookup_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("Invalid SP_LISTEN_ADDR");
        let cors_allow = std::env::var("SP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("SP_STATIC_DIR").unwrap_or_else(|_| "public".into());
        let quote_source = match std::env::var("SP_QUOTE_SOURCE")
            .unwrap_or_else(|_| "proxy".into())
            .to_lowercase()
            .as_str()
        {
            "fixed" => QuoteSource::Fixed,
            _ => QuoteSource::Proxy,
        };
        let quote_proxy_url = std::env::var("SP_QUOTE_PROXY_URL").ok();
        let lookup_timeout_ms: u64 = std::env::var("SP_LOOKUP_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .unwrap_or(10000);
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            quote_source,
            quote_proxy_url,
            lookup_timeout: Duration::from_millis(lookup_timeout_ms),
        }
    }
}
