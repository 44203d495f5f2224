use crate::config::Config;
use crate::store::PageStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: PageStore,
    pub config: Arc<Config>,
}
