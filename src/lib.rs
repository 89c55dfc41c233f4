//! Flight Feed
//!
//! A minimal HTTP server that serves a live page and pushes simulated
//! receiver telemetry to browsers over WebSocket.
//!
//! # Features
//!
//! - **Three feeds**: aircraft traffic, receiver status, GPS/attitude situation
//! - **Push streams**: one JSON report per interval on `/traffic`, `/status`, `/situation`
//! - **Snapshots**: `/getTraffic`, `/getStatus`, `/getSituation` return one report
//! - **Pluggable sources**: swap the simulated generators for real receivers
//!
//! # Modules
//!
//! - `types`: Report data structures and feed identifiers
//! - `source`: The `ReportSource` trait and simulated generators
//! - `config`: Command line arguments and validated server configuration
//! - `api`: Router, page, snapshot and WebSocket handlers
//! - `error`: Error type shared by the crate
//! - `utils`: Utility functions (timestamps, etc.)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use flight_feed::{api, AppState, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> flight_feed::FeedResult<()> {
//!     let state = Arc::new(AppState::simulated(ServerConfig::default()));
//!     let listener = api::bind(&state).await?;
//!     api::serve(listener, state).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod source;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::AppState;
pub use config::{Args, ServerConfig};
pub use error::{FeedError, FeedResult};
pub use source::{ReportSource, Sources};
pub use types::{Feed, SituationReport, StatusReport, TrafficReport, TrafficSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
