//! Core utilities for the NBA stats CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: Two-tier (memory + file) caching of raw API responses
//! - `throttle`: Fixed inter-request delay for the rate-limited API

pub mod cache;
pub mod throttle;

// Re-export commonly used items for convenience
pub use cache::{try_read_to_string, write_string, CacheStatus, GLOBAL_CACHE};
pub use throttle::{Throttle, REQUEST_DELAY};
