//! Analytics API Handler
//!
//! 请求流程：归一化过滤参数 → 按谓词检索订单 → 单遍聚合 →
//! 枚举过滤选项 → 组装响应。过滤选项始终基于全量数据，
//! 不受当前过滤器影响。

use axum::{
    Json,
    extract::{Query, State},
};

use crate::analytics::{self, FilterParams, OrderFilter};
use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::AppResult;
use shared::models::AnalyticsResponse;

/// GET /api/analytics - Aggregated order analytics
///
/// Query parameters (all optional): `category`, `gender`, `device`,
/// `payment`, `startDate`, `endDate`.
pub async fn get_analytics(
    State(state): State<ServerState>,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<AnalyticsResponse>> {
    let filter = OrderFilter::from_params(&params)?;

    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_filtered(&filter).await?;

    tracing::debug!(
        order_count = orders.len(),
        filter = ?filter,
        "Aggregating filtered orders"
    );

    let report = analytics::aggregate(&orders)?;
    let filter_options = repo.filter_options().await?;

    Ok(Json(analytics::assemble(report, filter_options)))
}
