use std::{collections::VecDeque, sync::Mutex};

use futures::future::BoxFuture;

use crate::{QuoteError, QuoteRecord, QuoteResult, QuoteSource};

/// Result for a mocked `fetch` call.
/// It can either be a record or an error to return.
pub enum MockFetchResult {
    Record(QuoteRecord),
    Error(QuoteError),
}

impl MockFetchResult {
    /// Construct a result that yields the provided record.
    pub fn record(record: QuoteRecord) -> Self {
        Self::Record(record)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: QuoteError) -> Self {
        Self::Error(error)
    }
}

impl From<QuoteRecord> for MockFetchResult {
    fn from(record: QuoteRecord) -> Self {
        Self::record(record)
    }
}

impl From<QuoteError> for MockFetchResult {
    fn from(error: QuoteError) -> Self {
        Self::error(error)
    }
}

impl From<QuoteResult<QuoteRecord>> for MockFetchResult {
    fn from(result: QuoteResult<QuoteRecord>) -> Self {
        match result {
            Ok(record) => Self::Record(record),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockQuoteSourceState {
    mocked_fetch_results: VecDeque<MockFetchResult>,
    fetch_calls: usize,
}

/// A mock quote source for testing that counts fetches and yields predefined
/// results in order.
pub struct MockQuoteSource {
    provider: &'static str,
    endpoint: String,
    state: Mutex<MockQuoteSourceState>,
}

impl Default for MockQuoteSource {
    fn default() -> Self {
        Self {
            provider: "mock",
            endpoint: "mock://quotes".to_string(),
            state: Mutex::new(MockQuoteSourceState::default()),
        }
    }
}

impl MockQuoteSource {
    /// Construct a new mock quote source instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the provider identifier returned by the mock.
    pub fn set_provider(&mut self, provider: &'static str) {
        self.provider = provider;
    }

    /// Override the endpoint returned by the mock.
    pub fn set_endpoint<S: Into<String>>(&mut self, endpoint: S) {
        self.endpoint = endpoint.into();
    }

    /// Enqueue one or more mocked fetch results.
    pub fn enqueue_fetch_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockFetchResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_fetch_results.extend(results);
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked fetch result.
    pub fn enqueue_fetch<R>(&self, result: R) -> &Self
    where
        R: Into<MockFetchResult>,
    {
        self.enqueue_fetch_results(std::iter::once(result.into()))
    }

    /// Number of `fetch` calls made so far.
    pub fn fetch_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.fetch_calls
    }

    /// Clear both the call count and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_fetch_results.clear();
        state.fetch_calls = 0;
    }
}

impl QuoteSource for MockQuoteSource {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn fetch(&self) -> BoxFuture<'_, QuoteResult<QuoteRecord>> {
        Box::pin(async move {
            let result = {
                let mut state = self.state.lock().expect("mock state poisoned");
                state.fetch_calls += 1;
                state.mocked_fetch_results.pop_front()
            };

            match result {
                Some(MockFetchResult::Record(record)) => Ok(record),
                Some(MockFetchResult::Error(error)) => Err(error),
                None => Err(QuoteError::Invariant(
                    self.provider,
                    "no mocked fetch results available".into(),
                )),
            }
        })
    }
}
