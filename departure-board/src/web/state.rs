//! Application state for the web layer.

use std::sync::Arc;

use crate::board::DepartureBoard;
use crate::cache::JourneyCache;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
pub struct AppState<P> {
    /// Departure board over the live provider
    pub board: Arc<DepartureBoard<P>>,

    /// Last journeys served per stop and line
    pub snapshots: Arc<JourneyCache>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(board: DepartureBoard<P>, snapshots: JourneyCache) -> Self {
        Self {
            board: Arc::new(board),
            snapshots: Arc::new(snapshots),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            board: Arc::clone(&self.board),
            snapshots: Arc::clone(&self.snapshots),
        }
    }
}
