mod client_utils;
mod errors;
pub mod http;
mod opentelemetry;
pub mod quote_sdk_test;
mod quote_source;
mod types;

pub use errors::*;
pub use quote_source::QuoteSource;
pub use types::QuoteRecord;
