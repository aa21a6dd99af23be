//! Error types for seasonal anomaly detection.
//!
//! This module contains error types and the Result alias.

mod watch_error;

pub use watch_error::{Result, WatchError};
