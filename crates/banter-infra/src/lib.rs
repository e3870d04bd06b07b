//! Infrastructure layer for Banter.
//!
//! Everything that touches the filesystem or the platform lives here, so
//! `banter-core` stays free of I/O. Today that is configuration loading.

pub mod config;
