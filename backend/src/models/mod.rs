use std::sync::Arc;

use crate::config::Config;
use crate::middleware::RateLimiter;
use crate::store::DocStore;

pub mod summary;
pub mod task;

pub use summary::*;
pub use task::*;

/// Application state shared across all handlers
pub struct AppState {
    pub store: DocStore,
    pub config: Config,
    pub secret_rate_limiter: Arc<RateLimiter>,
}
