//! Quote provider implementations.

pub mod fcc_proxy;
pub mod fixed;
mod traits;

pub use traits::QuoteProvider;
