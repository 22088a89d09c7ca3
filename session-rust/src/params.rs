use crate::QuoteSession;
use quote_sdk::{QuoteRecord, QuoteSource};
use std::sync::Arc;

/// Parameters required to create a new quote session.
/// # Default Values
/// - `initial_quote`: `QuoteRecord::placeholder()`
pub struct SessionParams {
    /// Where quotes are fetched from on every refresh.
    pub source: Arc<dyn QuoteSource>,
    /// The quote shown until the first successful refresh.
    pub initial_quote: QuoteRecord,
}

impl SessionParams {
    #[must_use]
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            initial_quote: QuoteRecord::placeholder(),
        }
    }

    /// Set the quote shown before the first refresh
    #[must_use]
    pub fn initial_quote(mut self, initial_quote: QuoteRecord) -> Self {
        self.initial_quote = initial_quote;
        self
    }

    #[must_use]
    pub fn build(self) -> QuoteSession {
        QuoteSession::from_params(self)
    }
}
