//! Top-level facade crate for strato.
//!
//! Re-exports core types and the client library so users can depend on a single crate.

pub mod core {
    pub use strato_core::*;
}

pub mod client {
    pub use strato_client::*;
}
