//! Shared application state

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::source::Sources;

/// Read-only state handed to every request, plus a live-connection gauge
pub struct AppState {
    /// Startup configuration
    pub config: ServerConfig,

    /// Report sources for each feed
    pub sources: Sources,

    /// Number of push connections currently open
    connections: Arc<AtomicUsize>,
}

impl AppState {
    /// Create state with the given config and sources
    pub fn new(config: ServerConfig, sources: Sources) -> Self {
        Self {
            config,
            sources,
            connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create state backed by the simulated sources
    pub fn simulated(config: ServerConfig) -> Self {
        Self::new(config, Sources::simulated())
    }

    /// Number of push connections currently open
    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    /// Register a new push connection; it is released when the guard drops
    pub fn track_connection(&self) -> ConnectionGuard {
        self.connections.fetch_add(1, Ordering::SeqCst);
        ConnectionGuard {
            connections: Arc::clone(&self.connections),
        }
    }
}

/// Decrements the connection gauge on drop
pub struct ConnectionGuard {
    connections: Arc<AtomicUsize>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.connections.fetch_sub(1, Ordering::SeqCst);
    }
}
