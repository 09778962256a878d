//! Order Repository
//!
//! 过滤检索 + 去重枚举。WHERE 子句按激活的约束条件拼接，
//! 所有用户值都通过参数绑定传入，不做字符串插值。

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::analytics::filter::OrderFilter;
use shared::models::{FilterOptions, Order};

const TABLE: &str = "order";

/// Non-id columns of the order table, in model order
const ORDER_COLUMNS: &str = "product_category, gender, device_type, payment_method, \
     order_priority, order_date, sales, profit, aging";

/// Filterable fields, used as a whitelist for distinct-value queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Gender,
    Device,
    Payment,
}

impl FilterField {
    fn column(self) -> &'static str {
        match self {
            FilterField::Category => "product_category",
            FilterField::Gender => "gender",
            FilterField::Device => "device_type",
            FilterField::Payment => "payment_method",
        }
    }
}

#[derive(Debug, Deserialize)]
struct DistinctRow {
    value: String,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch all orders matching the normalized filter predicate
    ///
    /// An absent constraint matches every record; the date range is
    /// inclusive at both ends.
    pub async fn find_filtered(&self, filter: &OrderFilter) -> RepoResult<Vec<Order>> {
        let mut sql = format!("SELECT {ORDER_COLUMNS} FROM {TABLE}");

        let mut conditions: Vec<&str> = Vec::new();
        if filter.category.is_some() {
            conditions.push("product_category = $category");
        }
        if filter.gender.is_some() {
            conditions.push("gender = $gender");
        }
        if filter.device.is_some() {
            conditions.push("device_type = $device");
        }
        if filter.payment.is_some() {
            conditions.push("payment_method = $payment");
        }
        if filter.date_from.is_some() {
            conditions.push("order_date >= $date_from");
        }
        if filter.date_to.is_some() {
            conditions.push("order_date <= $date_to");
        }
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        let mut query = self.base.db().query(sql);
        if let Some(category) = &filter.category {
            query = query.bind(("category", category.clone()));
        }
        if let Some(gender) = &filter.gender {
            query = query.bind(("gender", gender.clone()));
        }
        if let Some(device) = &filter.device {
            query = query.bind(("device", device.clone()));
        }
        if let Some(payment) = &filter.payment {
            query = query.bind(("payment", payment.clone()));
        }
        if let Some(date_from) = filter.date_from {
            query = query.bind(("date_from", date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.bind(("date_to", date_to));
        }

        let orders: Vec<Order> = query.await?.take(0)?;
        Ok(orders)
    }

    /// Distinct values of one filterable field across *all* orders,
    /// ascending — independent of any active filter
    pub async fn distinct_values(&self, field: FilterField) -> RepoResult<Vec<String>> {
        // column() 是白名单常量，这里的拼接不含用户输入
        let column = field.column();
        let rows: Vec<DistinctRow> = self
            .base
            .db()
            .query(format!(
                "SELECT {column} AS value FROM {TABLE} GROUP BY value ORDER BY value ASC"
            ))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(|r| r.value).collect())
    }

    /// The full menu of filter choices (four enumerations, concurrent)
    pub async fn filter_options(&self) -> RepoResult<FilterOptions> {
        let (categories, genders, devices, payment_methods) = tokio::try_join!(
            self.distinct_values(FilterField::Category),
            self.distinct_values(FilterField::Gender),
            self.distinct_values(FilterField::Device),
            self.distinct_values(FilterField::Payment),
        )?;

        Ok(FilterOptions {
            categories,
            genders,
            devices,
            payment_methods,
        })
    }

    /// Insert a single order record
    pub async fn insert(&self, order: Order) -> RepoResult<()> {
        let _created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        Ok(())
    }

    /// Insert a batch of order records
    pub async fn insert_many(&self, orders: Vec<Order>) -> RepoResult<()> {
        for order in orders {
            self.insert(order).await?;
        }
        Ok(())
    }

    /// Total number of stored orders
    pub async fn count(&self) -> RepoResult<i64> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query(format!("SELECT count() AS count FROM {TABLE} GROUP ALL"))
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }
}
