//! WebSocket module for periodic report push
//!
//! Provides one endpoint per feed (`/traffic`, `/status`, `/situation`).
//!
//! ## Behavior
//! - One task per connection, no state shared between clients
//! - One JSON report per configured interval, in generation order
//! - Client frames are ignored except for close detection

pub mod handler;
pub mod state;

pub use handler::{push_reports, situation_ws, status_ws, traffic_ws};
pub use state::{AppState, ConnectionGuard};
