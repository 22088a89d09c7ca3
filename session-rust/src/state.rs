use quote_sdk::QuoteRecord;
use serde::Serialize;

/// Whether the current quote has been added to the favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteState {
    NotFavorited,
    Favorited,
}

/// Everything the quote screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// The quote currently on screen.
    pub current: QuoteRecord,
    /// Favorited quotes in the order they were added.
    pub favorites: Vec<QuoteRecord>,
    /// Set once `current` has been appended to `favorites`. Cleared by every
    /// successful refresh.
    pub current_is_favorited: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(current: QuoteRecord) -> Self {
        Self {
            current,
            favorites: Vec::new(),
            current_is_favorited: false,
        }
    }

    #[must_use]
    pub fn favorite_state(&self) -> FavoriteState {
        if self.current_is_favorited {
            FavoriteState::Favorited
        } else {
            FavoriteState::NotFavorited
        }
    }

    /// Text of each favorite, in insertion order.
    #[must_use]
    pub fn favorite_texts(&self) -> Vec<&str> {
        self.favorites.iter().map(QuoteRecord::text).collect()
    }

    pub(crate) fn replace_current(&mut self, record: QuoteRecord) {
        self.current = record;
        self.current_is_favorited = false;
    }

    /// Returns the appended quote, or `None` if the current quote was already
    /// favorited.
    pub(crate) fn favorite_current(&mut self) -> Option<QuoteRecord> {
        if self.current_is_favorited {
            return None;
        }
        self.favorites.push(self.current.clone());
        self.current_is_favorited = true;
        Some(self.current.clone())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(QuoteRecord::placeholder())
    }
}
