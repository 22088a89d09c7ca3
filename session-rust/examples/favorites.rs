use dotenvy::dotenv;
use quote_sdk::http::{HttpQuoteSource, HttpQuoteSourceOptions};
use quote_session::QuoteSession;
use std::{error::Error, sync::Arc};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source = Arc::new(HttpQuoteSource::new(HttpQuoteSourceOptions {
        endpoint: std::env::var("QUOTE_ENDPOINT").ok(),
        ..Default::default()
    }));
    let session = QuoteSession::new(source);

    let mut updates = session.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            println!(
                "[{:?}] {} ({} favorites)",
                state.favorite_state(),
                state.current.text(),
                state.favorites.len()
            );
        }
    });

    println!("{}", session.current().text());

    // Startup load, then an "Another one!" press. Failures keep the old quote.
    if let Err(error) = session.refresh().await {
        eprintln!("Could not retrieve or decode the JSON from endpoint: {error}");
    }
    session.favorite_current();
    session.favorite_current();

    if let Err(error) = session.refresh().await {
        eprintln!("Could not retrieve or decode the JSON from endpoint: {error}");
    }
    session.favorite_current();

    println!("Favourites");
    for text in session.favorite_texts() {
        println!("- {text}");
    }

    Ok(())
}
