//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

/// 核心错误类型
///
/// `Display` 即返回给调用方的消息文本。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    CreationFailed(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    /// 资源不存在
    pub fn beer_not_found(id: &str) -> Self {
        CoreError::NotFound(format!("Beer not found with id: {}", id))
    }

    /// 资源创建失败，`id` 为请求中提交的标识（可能为空）
    pub fn beer_cant_be_created(id: Option<&str>) -> Self {
        let id = id.unwrap_or_default();
        CoreError::CreationFailed(format!("Beer can't be created with id: {}", id))
    }

    /// 对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            // 与原有服务的映射保持一致
            CoreError::CreationFailed(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::CreationFailed(_) => "CREATION_FAILED",
            CoreError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("请求失败: {} - {}", status, self);

        let error_response = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
