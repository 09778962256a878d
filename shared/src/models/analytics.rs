//! Analytics Response Payload (数据分析响应)
//!
//! Wire contract for `GET /api/analytics`. Three top-level sections:
//!
//! ```json
//! {
//!   "data": { "salesByCategory": [...], ... },
//!   "metrics": { "totalSales": 0, ... },
//!   "filterOptions": { "categories": [...], ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Per-category sales and profit totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub sales: f64,
    pub profit: f64,
}

/// Generic name/value chart entry (device and gender sales, priority counts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: f64,
}

/// Per-payment-method profit and order count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProfit {
    pub payment_method: String,
    pub profit: f64,
    pub order_count: i64,
}

/// The five grouped summaries, each in first-occurrence order of its key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub sales_by_category: Vec<CategorySales>,
    pub sales_by_device: Vec<NameValue>,
    pub sales_by_gender: Vec<NameValue>,
    pub profit_by_payment: Vec<PaymentProfit>,
    pub orders_by_priority: Vec<NameValue>,
}

/// Scalar metrics over the whole filtered set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_sales: f64,
    pub total_profit: f64,
    pub order_count: i64,
    /// Mean delivery days; 0.0 for an empty set (never NaN)
    pub avg_aging: f64,
}

/// Distinct values per filterable field, independent of the active filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub genders: Vec<String>,
    pub devices: Vec<String>,
    pub payment_methods: Vec<String>,
}

/// Full analytics payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub data: AnalyticsData,
    pub metrics: Metrics,
    pub filter_options: FilterOptions,
}
