//! HTTP handlers for the demo API.
//!
//! This module organizes handlers by route:
//! - `hello`: Greeting with host identity and request time
//! - `health`: Liveness probe
//! - `info`: Static application metadata

pub mod health;
pub mod hello;
pub mod info;

pub use health::health_check;
pub use hello::hello;
pub use info::info;
