//! Delivery of notifications to the push backend.
//!
//! [`PushClient`] owns its [`PushConfig`] and a [`PushTransport`]; a send
//! issues one POST and reports the outcome either as a [`PushResponse`] or
//! through a [`PushCallback`]. No retries are attempted.

mod callback;
mod client;
mod config;
mod region;
pub mod transport;

pub use callback::{FnCallback, PushCallback, PushResponse};
pub use client::PushClient;
pub use config::PushConfig;
pub use region::Region;
pub use transport::{PushRequest, PushTransport, ReqwestTransport, TransportResponse};
