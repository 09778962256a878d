//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构。所有错误在请求边界转换为
//! `{"error": "..."}` JSON，5xx 错误只记录原因、不向客户端泄露内部细节。
//!
//! # 错误分类
//!
//! | 变体 | 状态码 | 说明 |
//! |------|--------|------|
//! | Validation | 400 | 过滤参数格式错误 (例如无法解析的日期) |
//! | NotFound | 404 | 资源不存在 |
//! | DataIntegrity | 500 | 存储返回了畸形订单记录，绝不静默置零 |
//! | Retrieval | 500 | 存储不可用，返回通用失败消息 |
//! | Internal | 500 | 其他内部错误 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// 错误响应结构: `{"error": "..."}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            // 畸形记录：记录细节，向客户端报告完整性问题
            AppError::DataIntegrity(msg) => {
                error!(target: "analytics", error = %msg, "Data integrity violation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Data integrity violation: {msg}"),
                )
            }

            // 存储故障：只记录，不泄露内部细节
            AppError::Retrieval(msg) => {
                error!(target: "database", error = %msg, "Order retrieval failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch analytics data".to_string(),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorBody { error: message });
        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn data_integrity(msg: impl Into<String>) -> Self {
        Self::DataIntegrity(msg.into())
    }

    pub fn retrieval(msg: impl Into<String>) -> Self {
        Self::Retrieval(msg.into())
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = std::result::Result<T, AppError>;
