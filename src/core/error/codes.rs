//! 对外错误码定义
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (00=成功, 02=执行, 03=验证, 05=资源, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 对外错误码 - 用于向查询层和缓存层返回稳定的错误标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,

    // ==================== 执行错误 (02xx) ====================
    /// 通用执行错误
    ExecutionError = 200,
    /// 扫描预算超出
    ResourceExhausted = 202,

    // ==================== 验证错误 (03xx) ====================
    /// 通用验证错误
    ValidationError = 300,
    /// 无效输入
    InvalidInput = 302,
    /// 不支持的操作
    Unsupported = 304,

    // ==================== 资源错误 (05xx) ====================
    /// 资源未找到（如列不存在）
    ResourceNotFound = 500,

    // ==================== 系统错误 (09xx) ====================
    /// 内部错误
    InternalError = 900,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 根据 i32 值获取错误码
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(ErrorCode::Success),
            200 => Some(ErrorCode::ExecutionError),
            202 => Some(ErrorCode::ResourceExhausted),
            300 => Some(ErrorCode::ValidationError),
            302 => Some(ErrorCode::InvalidInput),
            304 => Some(ErrorCode::Unsupported),
            500 => Some(ErrorCode::ResourceNotFound),
            900 => Some(ErrorCode::InternalError),
            _ => None,
        }
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            0 => ErrorCategory::Success,
            200..=299 => ErrorCategory::Execution,
            300..=399 => ErrorCategory::Validation,
            500..=599 => ErrorCategory::Resource,
            900..=999 => ErrorCategory::System,
            _ => ErrorCategory::Unknown,
        }
    }

    /// 获取默认的错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "成功",
            ErrorCode::ExecutionError => "执行错误",
            ErrorCode::ResourceExhausted => "资源不足",
            ErrorCode::ValidationError => "验证错误",
            ErrorCode::InvalidInput => "无效输入",
            ErrorCode::Unsupported => "不支持的操作",
            ErrorCode::ResourceNotFound => "资源未找到",
            ErrorCode::InternalError => "内部错误",
        }
    }

    /// 判断是否为调用方错误
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::Resource
        )
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::Success
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Success,
    Execution,
    Validation,
    Resource,
    System,
    Unknown,
}

/// 对外错误信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// 转换为对外错误的 trait
pub trait ToPublicError {
    fn to_public_error(&self) -> PublicError;

    fn to_error_code(&self) -> ErrorCode;

    fn to_public_message(&self) -> String;
}
