//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`activities`, `message`, `removal`) so the
//! view components depend on small focused models, and so the domain
//! rules stay plain Rust that tests can drive without a browser.

pub mod activities;
pub mod message;
pub mod removal;
