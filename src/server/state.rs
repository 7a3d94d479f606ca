use std::sync::Arc;

use crate::config::ServerConfig;
use crate::BinaryBench;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    bench: Arc<BinaryBench>,
}

impl AppState {
    /// Wrap the server settings and the benchmark service.
    pub fn new(config: ServerConfig, bench: BinaryBench) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                bench: Arc::new(bench),
            }),
        }
    }

    /// Server settings.
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Handle to the benchmark service, cheap to move into blocking tasks.
    pub fn bench(&self) -> Arc<BinaryBench> {
        Arc::clone(&self.inner.bench)
    }
}
