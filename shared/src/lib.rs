//! Shared types for the analytics server
//!
//! Data contracts used across crates: the order record model and the
//! analytics response payload returned by the HTTP API.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AnalyticsData, AnalyticsResponse, CategorySales, FilterOptions, Metrics, NameValue, Order,
    PaymentProfit,
};
