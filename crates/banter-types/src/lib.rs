//! Shared domain types for Banter.
//!
//! This crate contains the types passed between the session store, the reply
//! policy, and the HTTP layer: messages, histories, session identifiers,
//! exchange results, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod message;
pub mod session;
