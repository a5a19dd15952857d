//! Application State
//!
//! Shared state handed to every handler behind an `Arc`.

use std::sync::Arc;
use std::time::Instant;

use super::seed::SeedData;
use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// Records served by the list endpoints
    pub seed: Arc<SeedData>,
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// State over the built-in fixtures
    pub fn new(config: ServerConfig) -> Self {
        Self::with_seed(SeedData::populate(), config)
    }

    pub fn with_seed(seed: SeedData, config: ServerConfig) -> Self {
        Self {
            seed: Arc::new(seed),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
