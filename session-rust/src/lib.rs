mod params;
mod session;
mod state;

pub use params::SessionParams;
pub use session::QuoteSession;
pub use state::{FavoriteState, SessionState};
