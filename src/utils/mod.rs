//! Utility functions and helpers
//!
//! This module contains timestamp utilities shared by the report sources.

pub mod time;

pub use time::{millis_since, seconds_since_midnight};
