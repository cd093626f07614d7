//! Application state management.

use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use palette_store::ColorStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::error::AppResult;

/// Application state shared across request handlers.
///
/// The store is the sole source of truth; the server keeps no copy of
/// color data between requests.
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
    /// The color repository.
    pub store: ColorStore,
    /// Metrics collector.
    metrics: RwLock<MetricsState>,
    /// Start time.
    start_time: Instant,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("start_time", &self.start_time)
            .finish()
    }
}

impl AppState {
    /// Create application state, opening the database named by the config.
    pub fn new(config: ServerConfig) -> AppResult<Self> {
        let store = match &config.database {
            Some(path) if path == Path::new(":memory:") => ColorStore::open_in_memory()?,
            Some(path) => ColorStore::open(path)?,
            None => {
                let path = palette_store::default_db_path()?;
                ColorStore::open(path)?
            }
        };
        Ok(Self::with_store(config, store))
    }

    /// Create application state around an already-open store.
    pub fn with_store(config: ServerConfig, store: ColorStore) -> Self {
        Self {
            config,
            store,
            metrics: RwLock::new(MetricsState::default()),
            start_time: Instant::now(),
        }
    }

    /// Get uptime duration.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Increment a counter metric.
    pub async fn increment_counter(&self, name: &str) {
        let mut metrics = self.metrics.write().await;
        *metrics.counters.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Get metrics snapshot.
    pub async fn metrics_snapshot(&self) -> MetricsSnapshot {
        let metrics = self.metrics.read().await;

        MetricsSnapshot {
            uptime_seconds: self.uptime().as_secs(),
            colors_created: *metrics.counters.get("colors_created").unwrap_or(&0),
            colors_updated: *metrics.counters.get("colors_updated").unwrap_or(&0),
            colors_deleted: *metrics.counters.get("colors_deleted").unwrap_or(&0),
        }
    }
}

/// Metrics state.
#[derive(Debug, Default)]
struct MetricsState {
    /// Counter metrics.
    counters: HashMap<String, u64>,
}

/// Metrics snapshot.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Server uptime in seconds.
    pub uptime_seconds: u64,
    /// Colors created via POST.
    pub colors_created: u64,
    /// Colors updated via PUT.
    pub colors_updated: u64,
    /// Colors deleted via DELETE.
    pub colors_deleted: u64,
}
