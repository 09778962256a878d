//! 聚合核心模块 (数据分析)
//!
//! # 结构
//!
//! - [`filter`] - 查询参数归一化为类型化过滤谓词
//! - [`engine`] - 单遍分组聚合 + 标量指标
//! - [`assemble`] - 响应组装 (纯结构组合)
//!
//! 聚合是 (谓词, 记录集) 的纯函数：无共享可变状态，
//! 每个请求的累加器都是请求本地的。

pub mod engine;
pub mod filter;

pub use engine::{AnalyticsReport, aggregate};
pub use filter::{FilterParams, OrderFilter};

use shared::models::{AnalyticsResponse, FilterOptions};

/// Combine the aggregation output with the filter option lists into the
/// final payload. No transformation beyond structural composition.
pub fn assemble(report: AnalyticsReport, filter_options: FilterOptions) -> AnalyticsResponse {
    AnalyticsResponse {
        data: report.data,
        metrics: report.metrics,
        filter_options,
    }
}
