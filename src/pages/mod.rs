//! Top-level pages.

pub mod board;
