//! 段元数据接口
//!
//! 物理存储格式和索引不属于本层，算子只通过 `SegmentMetadata` 读取
//! 列目录和总行数，从不修改段。

use std::collections::HashSet;

use crate::core::error::{QueryError, QueryResult};
use crate::core::schema::ColumnSchema;
use crate::core::types::DataType;

/// 不可变段的元数据视图
///
/// `columns()` 的顺序由段自身定义，对同一个段保持稳定；
/// 选择全部列时输出 schema 直接沿用该顺序。
pub trait SegmentMetadata: Send + Sync + std::fmt::Debug {
    /// 段名称（用于诊断和错误信息）
    fn segment_name(&self) -> &str;

    /// 按段声明顺序返回全部列
    fn columns(&self) -> &[ColumnSchema];

    /// 段内总文档数
    fn total_row_count(&self) -> u64;

    fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns().iter().find(|c| c.name == name)
    }

    fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}

/// 内存中的段元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySegment {
    name: String,
    columns: Vec<ColumnSchema>,
    total_row_count: u64,
}

impl MemorySegment {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<ColumnSchema>,
        total_row_count: u64,
    ) -> QueryResult<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(QueryError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
            total_row_count,
        })
    }

    pub fn builder(name: impl Into<String>) -> MemorySegmentBuilder {
        MemorySegmentBuilder::new(name)
    }
}

impl SegmentMetadata for MemorySegment {
    fn segment_name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    fn total_row_count(&self) -> u64 {
        self.total_row_count
    }
}

/// `MemorySegment` 构建器，按调用顺序声明列
#[derive(Debug, Clone)]
pub struct MemorySegmentBuilder {
    name: String,
    columns: Vec<ColumnSchema>,
    total_row_count: u64,
}

impl MemorySegmentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            total_row_count: 0,
        }
    }

    pub fn column(mut self, name: impl Into<String>, data_type: DataType) -> Self {
        self.columns.push(ColumnSchema::new(name, data_type));
        self
    }

    pub fn total_row_count(mut self, total_row_count: u64) -> Self {
        self.total_row_count = total_row_count;
        self
    }

    pub fn build(self) -> QueryResult<MemorySegment> {
        MemorySegment::new(self.name, self.columns, self.total_row_count)
    }
}
