pub mod bridge_service;
pub mod client;
pub mod config;
pub mod errors;
pub mod operations;
pub mod response_formatter;
pub mod tool_router;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use client::BridgeClient;
pub use config::BridgeConfig;
pub use errors::{BridgeError, BridgeErrorKind};
pub use types::*;
