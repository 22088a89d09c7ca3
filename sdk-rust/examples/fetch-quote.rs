use dotenvy::dotenv;
use quote_sdk::{
    http::{HttpQuoteSource, HttpQuoteSourceOptions},
    QuoteSource,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = HttpQuoteSource::new(HttpQuoteSourceOptions {
        endpoint: std::env::var("QUOTE_ENDPOINT").ok(),
        timeout: Some(Duration::from_secs(10)),
        ..Default::default()
    });

    let record = source.fetch().await.unwrap();

    println!("{record:#?}");
}
