mod quote;

pub use quote::StockQuote;
