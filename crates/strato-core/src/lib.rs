//! strato core: transport-agnostic request/response primitives.
//!
//! This crate defines the payload model, request assembly, envelope decoding,
//! and error surface shared by the client runtime and by test tooling. It
//! intentionally carries no transport or runtime dependencies so it can be
//! reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StratoError`/`Result` so host
//! applications do not crash on malformed server output.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod envelope;
pub mod error;
pub mod payload;
pub mod request;

/// Shared result type.
pub use error::{Result, StratoError};
