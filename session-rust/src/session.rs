use crate::{FavoriteState, SessionParams, SessionState};
use quote_sdk::{QuoteRecord, QuoteResult, QuoteSource};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info_span, warn};
use tracing_futures::Instrument;

/// Holds the quote on screen, the favorites list and the favorite flag for the
/// lifetime of one quote screen.
///
/// The state lives in a watch channel. Every change is applied under the
/// channel's lock and published to subscribers, so hosts can either read
/// snapshots with [`QuoteSession::state`] or react to changes through
/// [`QuoteSession::subscribe`].
pub struct QuoteSession {
    source: Arc<dyn QuoteSource>,
    state: watch::Sender<SessionState>,
}

impl QuoteSession {
    /// Create a session with the placeholder quote.
    #[must_use]
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        SessionParams::new(source).build()
    }

    #[must_use]
    pub fn builder(source: Arc<dyn QuoteSource>) -> SessionParams {
        SessionParams::new(source)
    }

    pub(crate) fn from_params(params: SessionParams) -> Self {
        let (state, _) = watch::channel(SessionState::new(params.initial_quote));
        Self {
            source: params.source,
            state,
        }
    }

    /// Fetch a new quote and make it the current one.
    ///
    /// On success the favorite flag is cleared, even when the new quote is
    /// already in the favorites. On failure the state is left untouched; the
    /// error is logged and returned so the caller can decide whether to show
    /// it.
    ///
    /// Overlapping calls are not serialized: the fetch runs without holding
    /// the state lock and whichever call completes last sets the current
    /// quote.
    pub async fn refresh(&self) -> QuoteResult<QuoteRecord> {
        let span = info_span!("quote_session.refresh", provider = self.source.provider());

        async {
            match self.source.fetch().await {
                Ok(record) => {
                    self.state
                        .send_modify(|state| state.replace_current(record.clone()));
                    debug!(quote_id = record.id(), "refreshed current quote");
                    Ok(record)
                }
                Err(error) => {
                    warn!(
                        endpoint = %self.source.endpoint(),
                        %error,
                        "could not retrieve or decode quote"
                    );
                    Err(error)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Append the current quote to the favorites unless it is already there.
    /// Calling it again for the same current quote is a no-op.
    pub fn favorite_current(&self) {
        let mut favorited = None;
        self.state.send_if_modified(|state| {
            favorited = state.favorite_current();
            favorited.is_some()
        });
        if let Some(record) = favorited {
            debug!(quote_id = record.id(), "favorited quote");
        }
    }

    /// A snapshot of the whole state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn current(&self) -> QuoteRecord {
        self.state.borrow().current.clone()
    }

    #[must_use]
    pub fn favorites(&self) -> Vec<QuoteRecord> {
        self.state.borrow().favorites.clone()
    }

    #[must_use]
    pub fn favorite_texts(&self) -> Vec<String> {
        self.state
            .borrow()
            .favorite_texts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn current_is_favorited(&self) -> bool {
        self.state.borrow().current_is_favorited
    }

    #[must_use]
    pub fn favorite_state(&self) -> FavoriteState {
        self.state.borrow().favorite_state()
    }

    /// Receive a new snapshot after every successful refresh and every
    /// favorite that changes the list.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
