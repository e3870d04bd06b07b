//! Rule-based reply selection.
//!
//! The policy is a pure function of the incoming text and the session history;
//! see [`policy::decide`].

pub mod policy;

pub use policy::decide;
