//! Rust client for the Typefully publishing API.
//!
//! Covers draft creation and the recently-scheduled listing. Each call is a
//! single request/response round-trip; there is no retry or caching layer.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{TypefullyClient, TypefullyClientBuilder};
pub use config::ClientConfig;
pub use error::{TypefullyError, TypefullyResult};
pub use types::{ContentFilter, DraftRequest};

/// Production API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.typefully.com/v1";
