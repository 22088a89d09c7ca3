use crate::{client_utils, QuoteError, QuoteRecord, QuoteResult, QuoteSource};
use futures::future::BoxFuture;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::{collections::HashMap, time::Duration};

const PROVIDER: &str = "http";

/// The random quote endpoint used when no other endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "http://forismatic.com/";

/// Fetches quotes with a plain HTTP GET against a fixed endpoint.
pub struct HttpQuoteSource {
    endpoint: String,
    client: Client,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct HttpQuoteSourceOptions {
    /// Defaults to [`DEFAULT_ENDPOINT`].
    pub endpoint: Option<String>,
    /// Extra request headers. `Accept` is always `application/json`.
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
    /// Per-request timeout. A timeout surfaces as a transport error.
    pub timeout: Option<Duration>,
}

impl HttpQuoteSource {
    #[must_use]
    pub fn new(options: HttpQuoteSourceOptions) -> Self {
        let HttpQuoteSourceOptions {
            endpoint,
            headers,
            client,
            timeout,
        } = options;

        Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            client: client.unwrap_or_else(Client::new),
            headers: headers.unwrap_or_default(),
            timeout,
        }
    }

    fn request_headers(&self) -> QuoteResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                QuoteError::InvalidInput(format!("Invalid header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                QuoteError::InvalidInput(format!("Invalid header value for '{key}': {error}"))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

impl Default for HttpQuoteSource {
    fn default() -> Self {
        Self::new(HttpQuoteSourceOptions::default())
    }
}

impl QuoteSource for HttpQuoteSource {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn fetch(&self) -> BoxFuture<'_, QuoteResult<QuoteRecord>> {
        Box::pin(async move {
            crate::opentelemetry::trace_fetch(self.provider(), &self.endpoint, || async move {
                let headers = self.request_headers()?;
                let body =
                    client_utils::get_json_body(&self.client, &self.endpoint, headers, self.timeout)
                        .await?;
                let record = QuoteRecord::from_json(&body)?;

                tracing::debug!(quote_id = record.id(), "fetched quote");
                Ok(record)
            })
            .await
        })
    }
}
