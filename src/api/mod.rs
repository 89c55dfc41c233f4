//! API module for HTTP and WebSocket endpoints
//!
//! This module serves the home page, the one-shot snapshot endpoints and the
//! WebSocket push streams.

pub mod http;
pub mod page;
pub mod rest;
pub mod websocket;

pub use http::{bind, create_router, serve};
pub use websocket::AppState;
