//! Outbound HTTP plumbing.

pub mod client;
