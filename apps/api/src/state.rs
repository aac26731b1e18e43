use std::sync::Arc;

use crate::config::Config;
use crate::notes::generator::NoteGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<NoteGenerator>,
    pub config: Config,
}
