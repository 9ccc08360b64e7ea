// 核心类型系统模块
//
// 包含列存段的列值类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 列值类型
///
/// 单值列每个文档对应一个值；多值列（`*Array`）每个文档可能对应多个值，
/// 因此扫描条目数可能大于扫描文档数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Timestamp,
    String,
    Json,
    Bytes,
    IntArray,
    LongArray,
    FloatArray,
    DoubleArray,
    StringArray,
}

impl DataType {
    /// 类型名称（用于诊断输出）
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int => "INT",
            DataType::Long => "LONG",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Boolean => "BOOLEAN",
            DataType::Timestamp => "TIMESTAMP",
            DataType::String => "STRING",
            DataType::Json => "JSON",
            DataType::Bytes => "BYTES",
            DataType::IntArray => "INT_ARRAY",
            DataType::LongArray => "LONG_ARRAY",
            DataType::FloatArray => "FLOAT_ARRAY",
            DataType::DoubleArray => "DOUBLE_ARRAY",
            DataType::StringArray => "STRING_ARRAY",
        }
    }

    /// 是否为单值列类型
    pub fn is_single_value(&self) -> bool {
        !self.is_multi_value()
    }

    /// 是否为多值列类型
    pub fn is_multi_value(&self) -> bool {
        matches!(
            self,
            DataType::IntArray
                | DataType::LongArray
                | DataType::FloatArray
                | DataType::DoubleArray
                | DataType::StringArray
        )
    }

    /// 多值列的元素类型；单值列返回自身
    pub fn element_type(&self) -> DataType {
        match self {
            DataType::IntArray => DataType::Int,
            DataType::LongArray => DataType::Long,
            DataType::FloatArray => DataType::Float,
            DataType::DoubleArray => DataType::Double,
            DataType::StringArray => DataType::String,
            other => *other,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
