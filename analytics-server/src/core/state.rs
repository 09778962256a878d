use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 所有请求共享的只读引用
///
/// ServerState 持有配置和嵌入式数据库句柄，`Clone` 为浅拷贝。
/// 每个请求的过滤结果集和聚合累加器都是请求本地的，
/// 请求之间不共享任何可变状态。
///
/// # 字段
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开 `work_dir/database` 下的嵌入式数据库并定义 schema。
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_service = DbService::open(&config.database_dir()).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
        })
    }

    /// 构造测试用状态 (内存数据库)
    pub async fn in_memory(config: Config) -> anyhow::Result<Self> {
        let db_service = DbService::in_memory().await?;
        Ok(Self {
            config,
            db: db_service.db,
        })
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
