//! Session identifiers and the concurrent session store.

pub mod id;
pub mod store;

pub use id::{SessionIdGenerator, UuidSessionIds};
pub use store::{SessionCheckout, SessionStore};
