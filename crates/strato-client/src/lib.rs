//! strato client library entry.
//!
//! This crate wires the config layer, HTTP transport, async dispatcher,
//! session state, and the high-level API surface into a usable SDK. It is
//! consumed through the [`api::Strato`] client and by integration tests.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod session;
pub mod transport;

pub use api::Strato;
