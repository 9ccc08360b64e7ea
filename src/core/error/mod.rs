//! 统一错误处理系统
//!
//! ## 设计理念
//!
//! 1. **分层定义**：查询层（列解析、结果块、算子）与聚合归约各自使用独立的错误枚举
//! 2. **自动转换**：子错误通过 `#[from]` 汇入 `DBError`，保留完整错误信息
//! 3. **统一接口**：`DBResult<T>` 提供统一的返回类型，简化错误传播
//!
//! 本层没有任何重试逻辑，错误直接返回给直接调用方。

use thiserror::Error;

pub mod aggregate;
pub mod codes;
pub mod query;

pub use aggregate::{AggregateError, AggregateResult};
pub use codes::{ErrorCategory, ErrorCode, PublicError, ToPublicError};
pub use query::{QueryError, QueryResult};

/// 统一的错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DBError {
    #[error("查询错误: {0}")]
    Query(#[from] QueryError),

    #[error("聚合错误: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 统一的结果类型
pub type DBResult<T> = Result<T, DBError>;

impl ToPublicError for DBError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            DBError::Query(qe) => qe.to_error_code(),
            DBError::Aggregate(ae) => ae.to_error_code(),
            DBError::Config(_) => ErrorCode::InvalidInput,
            DBError::Internal(_) => ErrorCode::InternalError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            DBError::Query(qe) => qe.to_public_message(),
            DBError::Aggregate(ae) => ae.to_public_message(),
            DBError::Internal(_) => ErrorCode::InternalError.default_message().to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for DBError {
    fn from(err: toml::de::Error) -> Self {
        DBError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DBError {
    fn from(err: serde_json::Error) -> Self {
        DBError::Internal(format!("JSON 序列化失败: {}", err))
    }
}
