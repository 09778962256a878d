//! 聚合引擎
//!
//! 对已过滤的订单序列做一次线性遍历，同时累加五个分组汇总和
//! 四个标量指标。分组内条目按 key 首次出现的顺序排列，不排序。
//!
//! 引擎不做过滤（谓词已在存储层应用），也绝不把畸形记录
//! 静默按零处理：空的分类字段或非法数值直接报完整性错误。

use std::collections::HashMap;

use shared::models::{AnalyticsData, CategorySales, Metrics, NameValue, Order, PaymentProfit};

use crate::utils::{AppError, AppResult};

/// Aggregation output: the five groupings plus the scalar metrics
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub data: AnalyticsData,
    pub metrics: Metrics,
}

/// Accumulator list keyed by a categorical value, in first-occurrence order
struct Grouped<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Grouped<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Accumulator for `key`, created via `new_entry` on first occurrence
    fn entry(&mut self, key: &str, new_entry: impl FnOnce() -> T) -> &mut T {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(new_entry());
                self.entries.len() - 1
            }
        };
        &mut self.entries[i]
    }

    fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

/// Aggregate a filtered order sequence in a single pass
///
/// Empty input yields empty groupings and zero-valued metrics.
pub fn aggregate(orders: &[Order]) -> AppResult<AnalyticsReport> {
    let mut by_category: Grouped<CategorySales> = Grouped::new();
    let mut by_device: Grouped<NameValue> = Grouped::new();
    let mut by_gender: Grouped<NameValue> = Grouped::new();
    let mut by_payment: Grouped<PaymentProfit> = Grouped::new();
    let mut by_priority: Grouped<NameValue> = Grouped::new();

    let mut total_sales = 0.0;
    let mut total_profit = 0.0;
    let mut aging_sum = 0.0;

    for order in orders {
        check_integrity(order)?;

        total_sales += order.sales;
        total_profit += order.profit;
        aging_sum += order.aging;

        let category = by_category.entry(&order.product_category, || CategorySales {
            category: order.product_category.clone(),
            sales: 0.0,
            profit: 0.0,
        });
        category.sales += order.sales;
        category.profit += order.profit;

        let device = by_device.entry(&order.device_type, || NameValue {
            name: order.device_type.clone(),
            value: 0.0,
        });
        device.value += order.sales;

        let gender = by_gender.entry(&order.gender, || NameValue {
            name: order.gender.clone(),
            value: 0.0,
        });
        gender.value += order.sales;

        let payment = by_payment.entry(&order.payment_method, || PaymentProfit {
            payment_method: order.payment_method.clone(),
            profit: 0.0,
            order_count: 0,
        });
        payment.profit += order.profit;
        payment.order_count += 1;

        let priority = by_priority.entry(&order.order_priority, || NameValue {
            name: order.order_priority.clone(),
            value: 0.0,
        });
        priority.value += 1.0;
    }

    let order_count = orders.len() as i64;
    // 空集合时平均值为 0，不允许 NaN 进入响应
    let avg_aging = if order_count > 0 {
        aging_sum / order_count as f64
    } else {
        0.0
    };

    Ok(AnalyticsReport {
        data: AnalyticsData {
            sales_by_category: by_category.into_vec(),
            sales_by_device: by_device.into_vec(),
            sales_by_gender: by_gender.into_vec(),
            profit_by_payment: by_payment.into_vec(),
            orders_by_priority: by_priority.into_vec(),
        },
        metrics: Metrics {
            total_sales,
            total_profit,
            order_count,
            avg_aging,
        },
    })
}

/// Reject malformed records instead of coercing them to zero
fn check_integrity(order: &Order) -> AppResult<()> {
    if order.product_category.is_empty() {
        return Err(AppError::data_integrity("order has empty product_category"));
    }
    if order.gender.is_empty() {
        return Err(AppError::data_integrity("order has empty gender"));
    }
    if order.device_type.is_empty() {
        return Err(AppError::data_integrity("order has empty device_type"));
    }
    if order.payment_method.is_empty() {
        return Err(AppError::data_integrity("order has empty payment_method"));
    }
    if order.order_priority.is_empty() {
        return Err(AppError::data_integrity("order has empty order_priority"));
    }
    if !order.sales.is_finite() || order.sales < 0.0 {
        return Err(AppError::data_integrity(format!(
            "order has invalid sales value: {}",
            order.sales
        )));
    }
    if !order.profit.is_finite() {
        return Err(AppError::data_integrity(format!(
            "order has invalid profit value: {}",
            order.profit
        )));
    }
    if !order.aging.is_finite() || order.aging < 0.0 {
        return Err(AppError::data_integrity(format!(
            "order has invalid aging value: {}",
            order.aging
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(category: &str, sales: f64, profit: f64) -> Order {
        Order {
            product_category: category.to_string(),
            gender: "Female".to_string(),
            device_type: "Web".to_string(),
            payment_method: "credit_card".to_string(),
            order_priority: "Medium".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            sales,
            profit,
            aging: 4.0,
        }
    }

    #[test]
    fn worked_example_from_three_records() {
        let orders = vec![
            order("A", 100.0, 20.0),
            order("A", 50.0, 5.0),
            order("B", 30.0, 10.0),
        ];

        let report = aggregate(&orders).unwrap();

        assert_eq!(
            report.data.sales_by_category,
            vec![
                CategorySales {
                    category: "A".into(),
                    sales: 150.0,
                    profit: 25.0
                },
                CategorySales {
                    category: "B".into(),
                    sales: 30.0,
                    profit: 10.0
                },
            ]
        );
        assert_eq!(report.metrics.total_sales, 180.0);
        assert_eq!(report.metrics.total_profit, 35.0);
        assert_eq!(report.metrics.order_count, 3);
    }

    #[test]
    fn empty_input_yields_zero_metrics_and_empty_groupings() {
        let report = aggregate(&[]).unwrap();

        assert!(report.data.sales_by_category.is_empty());
        assert!(report.data.sales_by_device.is_empty());
        assert!(report.data.sales_by_gender.is_empty());
        assert!(report.data.profit_by_payment.is_empty());
        assert!(report.data.orders_by_priority.is_empty());

        assert_eq!(report.metrics.total_sales, 0.0);
        assert_eq!(report.metrics.total_profit, 0.0);
        assert_eq!(report.metrics.order_count, 0);
        assert_eq!(report.metrics.avg_aging, 0.0);
        assert!(!report.metrics.avg_aging.is_nan());
    }

    #[test]
    fn grouping_totals_match_scalar_totals() {
        let orders = vec![
            order("Electronics", 120.5, 30.25),
            order("Fashion", 80.0, -5.0),
            order("Electronics", 99.5, 12.75),
            order("Home", 45.0, 9.0),
        ];

        let report = aggregate(&orders).unwrap();

        let category_sales: f64 = report.data.sales_by_category.iter().map(|c| c.sales).sum();
        assert_eq!(category_sales, report.metrics.total_sales);

        let payment_profit: f64 = report.data.profit_by_payment.iter().map(|p| p.profit).sum();
        assert_eq!(payment_profit, report.metrics.total_profit);
    }

    #[test]
    fn groupings_follow_first_occurrence_order() {
        let orders = vec![
            order("Zeta", 1.0, 0.0),
            order("Alpha", 1.0, 0.0),
            order("Zeta", 1.0, 0.0),
            order("Mid", 1.0, 0.0),
        ];

        let report = aggregate(&orders).unwrap();
        let keys: Vec<&str> = report
            .data
            .sales_by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn priority_and_payment_counts_accumulate() {
        let mut a = order("A", 10.0, 1.0);
        a.order_priority = "High".into();
        let mut b = order("B", 20.0, 2.0);
        b.order_priority = "High".into();
        let mut c = order("C", 30.0, 3.0);
        c.order_priority = "Low".into();

        let report = aggregate(&[a, b, c]).unwrap();

        assert_eq!(
            report.data.orders_by_priority,
            vec![
                NameValue {
                    name: "High".into(),
                    value: 2.0
                },
                NameValue {
                    name: "Low".into(),
                    value: 1.0
                },
            ]
        );
        assert_eq!(report.data.profit_by_payment.len(), 1);
        assert_eq!(report.data.profit_by_payment[0].order_count, 3);
    }

    #[test]
    fn avg_aging_is_mean_of_aging() {
        let mut a = order("A", 1.0, 0.0);
        a.aging = 2.0;
        let mut b = order("A", 1.0, 0.0);
        b.aging = 6.0;

        let report = aggregate(&[a, b]).unwrap();
        assert_eq!(report.metrics.avg_aging, 4.0);
    }

    #[test]
    fn aggregation_is_idempotent_over_same_input() {
        let orders = vec![order("A", 100.0, 20.0), order("B", 30.0, 10.0)];
        let first = aggregate(&orders).unwrap();
        let second = aggregate(&orders).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn negative_profit_is_accepted() {
        let report = aggregate(&[order("A", 10.0, -4.5)]).unwrap();
        assert_eq!(report.metrics.total_profit, -4.5);
    }

    #[test]
    fn empty_category_is_an_integrity_error() {
        let bad = order("", 10.0, 1.0);
        assert!(matches!(
            aggregate(&[bad]),
            Err(AppError::DataIntegrity(_))
        ));
    }

    #[test]
    fn non_finite_sales_is_an_integrity_error() {
        let bad = order("A", f64::NAN, 1.0);
        assert!(matches!(
            aggregate(&[bad]),
            Err(AppError::DataIntegrity(_))
        ));
    }

    #[test]
    fn negative_sales_is_an_integrity_error() {
        let bad = order("A", -1.0, 1.0);
        assert!(matches!(
            aggregate(&[bad]),
            Err(AppError::DataIntegrity(_))
        ));
    }
}
