//! Data models
//!
//! Shared between analytics-server and frontend (via API).
//! Wire format is camelCase JSON (`#[serde(rename_all = "camelCase")]`).

pub mod analytics;
pub mod order;

// Re-exports
pub use analytics::*;
pub use order::*;
