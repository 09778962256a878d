//! 过滤器归一化
//!
//! 把原始查询参数转换为类型化谓词 [`OrderFilter`]。
//! 规则：参数缺失、为空、或等于哨兵值 `"all"` 时不参与过滤；
//! 日期必须是合法的 `YYYY-MM-DD`，否则直接返回验证错误。

use chrono::NaiveDate;
use serde::Deserialize;

use crate::utils::{AppResult, time};

/// Sentinel meaning "constraint not applied"
pub const FILTER_ALL: &str = "all";

/// Raw query parameters as sent by the client (`GET /api/analytics?...`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
    pub gender: Option<String>,
    pub device: Option<String>,
    pub payment: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// Normalized filter predicate over order records
///
/// 不变式：缺失的约束匹配所有记录；日期范围两端均为闭区间。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub category: Option<String>,
    pub gender: Option<String>,
    pub device: Option<String>,
    pub payment: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl OrderFilter {
    /// Normalize raw parameters into a typed predicate
    ///
    /// Fails with a validation error on an unparseable date, rather than
    /// silently producing a predicate that matches nothing.
    pub fn from_params(params: &FilterParams) -> AppResult<Self> {
        Ok(Self {
            category: active_value(params.category.as_deref()),
            gender: active_value(params.gender.as_deref()),
            device: active_value(params.device.as_deref()),
            payment: active_value(params.payment.as_deref()),
            date_from: parse_date_param(params.start_date.as_deref())?,
            date_to: parse_date_param(params.end_date.as_deref())?,
        })
    }

    /// True when no constraint is active
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.gender.is_none()
            && self.device.is_none()
            && self.payment.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// 缺失、空串、哨兵 "all" 都视为未激活
fn active_value(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(v) if !v.is_empty() && v != FILTER_ALL => Some(v.to_string()),
        _ => None,
    }
}

fn parse_date_param(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match active_value(raw) {
        Some(v) => Ok(Some(time::parse_date(&v)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::AppError;

    fn params(category: Option<&str>, start: Option<&str>) -> FilterParams {
        FilterParams {
            category: category.map(str::to_string),
            start_date: start.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn absent_params_yield_unconstrained_filter() {
        let filter = OrderFilter::from_params(&FilterParams::default()).unwrap();
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn sentinel_and_empty_are_not_applied() {
        let filter = OrderFilter::from_params(&params(Some("all"), None)).unwrap();
        assert_eq!(filter.category, None);

        let filter = OrderFilter::from_params(&params(Some(""), None)).unwrap();
        assert_eq!(filter.category, None);
    }

    #[test]
    fn concrete_value_is_applied() {
        let filter = OrderFilter::from_params(&params(Some("Electronics"), None)).unwrap();
        assert_eq!(filter.category.as_deref(), Some("Electronics"));
    }

    #[test]
    fn valid_dates_are_parsed() {
        let raw = FilterParams {
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-01-31".into()),
            ..Default::default()
        };
        let filter = OrderFilter::from_params(&raw).unwrap();
        assert_eq!(
            filter.date_from,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn malformed_date_fails_fast() {
        let result = OrderFilter::from_params(&params(None, Some("01/31/2024")));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn normalization_has_no_side_effects() {
        let raw = params(Some("Fashion"), Some("2024-06-01"));
        let first = OrderFilter::from_params(&raw).unwrap();
        let second = OrderFilter::from_params(&raw).unwrap();
        assert_eq!(first, second);
    }
}
