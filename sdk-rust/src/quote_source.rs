use crate::{QuoteRecord, QuoteResult};
use futures::future::BoxFuture;

/// Anything that can produce a single random quote.
pub trait QuoteSource: Send + Sync {
    fn provider(&self) -> &'static str;
    /// The location quotes are fetched from.
    fn endpoint(&self) -> String;
    fn fetch(&self) -> BoxFuture<'_, QuoteResult<QuoteRecord>>;
}
