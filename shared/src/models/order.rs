//! Order Model (订单记录)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One e-commerce transaction — immutable fact, produced by ingestion
/// outside this system and read-only here.
///
/// The record id is store-assigned and not part of the wire model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Product category (e.g. "Electronics")
    pub product_category: String,
    /// Customer gender
    pub gender: String,
    /// Device the order was placed from (e.g. "Web", "Mobile")
    pub device_type: String,
    /// Payment method (e.g. "credit_card")
    pub payment_method: String,
    /// Fulfilment priority (e.g. "Critical", "High", "Medium", "Low")
    pub order_priority: String,
    /// Order date (calendar date, no time component)
    pub order_date: NaiveDate,
    /// Sale amount, non-negative
    pub sales: f64,
    /// Profit amount, may be negative
    pub profit: f64,
    /// Delivery time in days, non-negative
    pub aging: f64,
}
