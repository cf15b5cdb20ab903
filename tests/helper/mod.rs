//! Shared helpers for integration tests

pub mod provider;
pub mod server;

pub use provider::CancelAfter;
pub use server::{spawn_info_server, spawn_silent_server, unreachable_url};
