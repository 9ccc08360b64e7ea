//! 查询层错误类型
//!
//! 涵盖列解析、结果块构造和算子执行过程中的错误

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, PublicError, ToPublicError};
use crate::core::types::DataType;

/// 查询操作结果类型别名
pub type QueryResult<T> = Result<T, QueryError>;

/// 查询层错误类型
///
/// 所有错误都是结构性的：输入不变时重试不会成功，因此不做任何重试。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// 请求的列在段中不存在，直接返回给查询层
    #[error("未知列 '{column}'（段: {segment}）")]
    UnknownColumn { column: String, segment: String },

    #[error("重复的列名: {0}")]
    DuplicateColumn(String),

    /// 结果块构造时行宽与 schema 不一致，属于内部缺陷，只终止当前查询
    #[error("第 {row} 行包含 {actual} 列，schema 要求 {expected} 列")]
    SchemaRowMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// 单元格值与列类型不符，同样属于内部缺陷
    #[error("第 {row} 行列 '{column}' 的值类型为 {actual}，schema 要求 {expected}")]
    CellTypeMismatch {
        row: usize,
        column: String,
        expected: DataType,
        actual: String,
    },

    #[error("算子 {operator} 的子结果 schema 不一致: 期望 [{expected}]，实际 [{actual}]")]
    SchemaConflict {
        operator: String,
        expected: String,
        actual: String,
    },

    #[error("扫描文档数 {scanned} 超出预算 {limit}")]
    ScanBudgetExceeded { scanned: u64, limit: u64 },
}

impl QueryError {
    pub fn unknown_column(column: impl Into<String>, segment: impl Into<String>) -> Self {
        QueryError::UnknownColumn {
            column: column.into(),
            segment: segment.into(),
        }
    }

    /// 是否属于内部缺陷（而非调用方输入问题）
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            QueryError::SchemaRowMismatch { .. }
                | QueryError::CellTypeMismatch { .. }
                | QueryError::SchemaConflict { .. }
        )
    }
}

impl ToPublicError for QueryError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            QueryError::UnknownColumn { .. } => ErrorCode::ResourceNotFound,
            QueryError::DuplicateColumn(_) => ErrorCode::InvalidInput,
            QueryError::SchemaRowMismatch { .. } => ErrorCode::InternalError,
            QueryError::CellTypeMismatch { .. } => ErrorCode::InternalError,
            QueryError::SchemaConflict { .. } => ErrorCode::InternalError,
            QueryError::ScanBudgetExceeded { .. } => ErrorCode::ResourceExhausted,
        }
    }

    fn to_public_message(&self) -> String {
        if self.is_defect() {
            // 内部缺陷不暴露细节
            self.to_error_code().default_message().to_string()
        } else {
            self.to_string()
        }
    }
}
