//! Business logic for Banter.
//!
//! This crate owns the in-memory session store, the rule-based reply policy,
//! and the chat service that ties them together. It performs no I/O and
//! depends only on `banter-types`.

pub mod chat;
pub mod reply;
pub mod session;
