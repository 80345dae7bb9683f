//! Networking layer: typed REST calls to the activities service.

pub mod api;
