//! 聚合归约错误类型

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, PublicError, ToPublicError};

/// 聚合归约结果类型别名
pub type AggregateResult<T> = Result<T, AggregateError>;

/// 聚合归约错误
///
/// 两类错误都是调用方误用，同步返回，不做强制转换。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("不支持的聚合类型: {0}")]
    UnsupportedAggregationKind(String),

    /// 覆盖率要求 numerator > 0 且 denominator >= numerator
    #[error("无效的覆盖范围: {numerator}/{denominator}")]
    InvalidCoverage { numerator: i64, denominator: i64 },
}

impl ToPublicError for AggregateError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            AggregateError::UnsupportedAggregationKind(_) => ErrorCode::Unsupported,
            AggregateError::InvalidCoverage { .. } => ErrorCode::InvalidInput,
        }
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}
