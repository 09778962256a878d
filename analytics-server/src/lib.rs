//! Analytics Server - 电商订单数据分析服务
//!
//! # 架构概述
//!
//! 本模块是分析服务的主入口，提供以下核心功能：
//!
//! - **聚合核心** (`analytics`): 过滤谓词归一化 + 单遍分组聚合
//! - **数据库** (`db`): 嵌入式 SurrealDB 订单存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! analytics-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── analytics/     # 过滤器、聚合引擎、响应组装
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 错误类型、日志、时间工具
//! ```

pub mod analytics;
pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
