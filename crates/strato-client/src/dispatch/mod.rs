//! Non-blocking request dispatch.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, PendingBytes, PendingJson};
