mod source;

pub use source::{HttpQuoteSource, HttpQuoteSourceOptions, DEFAULT_ENDPOINT};
