//! Web layer for the departure board.
//!
//! Provides the JSON endpoint the display polls for upcoming journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
