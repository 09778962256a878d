//! 时间工具函数
//!
//! 日期字符串解析统一在过滤器归一化层完成，
//! repository 层只接收已经解析好的 `NaiveDate`。

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
///
/// 无法解析的日期直接失败，而不是生成一个匹配不到任何记录的谓词。
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let d = parse_date("2024-01-31").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_date("not-a-date"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_day() {
        assert!(parse_date("2024-02-31").is_err());
    }
}
