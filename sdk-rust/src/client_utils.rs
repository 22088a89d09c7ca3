use crate::QuoteError;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};
use std::time::Duration;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Send a GET request asking for JSON, return the raw response body.
/// Throws error on non-success status code.
pub async fn get_json_body(
    client: &Client,
    url: &str,
    mut headers: HeaderMap,
    timeout: Option<Duration>,
) -> Result<Vec<u8>, QuoteError> {
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let mut request = client.get(url).headers(headers);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await?;
    let status = response.status();
    Span::current().set_attribute("http.response.status_code", i64::from(status.as_u16()));

    if !status.is_success() {
        return Err(QuoteError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }

    // Decoding is left to the caller so a malformed payload surfaces as a
    // decode error rather than a transport error.
    Ok(response.bytes().await?.to_vec())
}
