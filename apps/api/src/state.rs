use std::sync::Arc;

use crate::auth::SessionStore;
use crate::matching::MatchScorer;
use crate::storage::LocalStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocalStore>,
    pub sessions: Arc<SessionStore>,
    /// Pluggable match scorer. Default: KeywordOverlapScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
