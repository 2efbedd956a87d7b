//! Observability for the TechStore storefront.
//!
//! This crate provides:
//! - `SessionLogger` - Structured logging with shopping-session context
//! - `init_tracing` - Global `tracing` subscriber for the binaries

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;

pub use techstore_commerce::SessionId;
