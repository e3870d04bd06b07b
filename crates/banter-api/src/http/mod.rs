//! HTTP layer for Banter.
//!
//! Axum routes translating JSON requests into chat service calls, with CORS
//! and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
