//! Chat request orchestration.

pub mod service;

pub use service::ChatService;
