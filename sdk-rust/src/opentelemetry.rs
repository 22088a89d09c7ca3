use crate::{QuoteRecord, QuoteResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct FetchSpan {
    span: Span,
    quote_id: Option<String>,
    start_time: Instant,
}

impl FetchSpan {
    pub fn new(provider: &str, endpoint: &str) -> Self {
        let span = info_span!("quote_sdk.fetch");
        span.set_attribute("quote_sdk.provider", provider.to_string());
        span.set_attribute("http.request.method", "GET");
        span.set_attribute("url.full", endpoint.to_string());

        Self {
            span,
            quote_id: None,
            start_time: Instant::now(),
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_response(&mut self, record: &QuoteRecord) {
        self.quote_id = Some(record.id().to_string());
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if let Some(quote_id) = self.quote_id.take() {
            self.span.set_attribute("quote_sdk.quote.id", quote_id);
        }

        self.span
            .set_attribute("quote_sdk.duration", self.start_time.elapsed().as_secs_f64());
    }
}

pub async fn trace_fetch<F, Fut>(provider: &str, endpoint: &str, f: F) -> QuoteResult<QuoteRecord>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = QuoteResult<QuoteRecord>>,
{
    let mut span = FetchSpan::new(provider, endpoint);
    let result = span.instrument_future(f()).await;

    match &result {
        Ok(record) => span.on_response(record),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}
