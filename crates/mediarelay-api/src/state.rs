//! Application state shared by the HTTP handlers.

use mediarelay_core::Config;
use mediarelay_storage::Storage;
use std::sync::Arc;

use crate::probe::MediaProbe;

/// Shared application state, handed to handlers via `State<Arc<AppState>>`.
///
/// Everything here is built once in setup from the loaded `Config`; handlers
/// never reach into the environment themselves.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub probe: MediaProbe,
}
