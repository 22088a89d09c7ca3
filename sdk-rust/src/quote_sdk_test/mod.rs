mod model;

pub use model::{MockFetchResult, MockQuoteSource};
