//! 选择列解析
//!
//! 根据请求列（可能为空、可能重复）和段的列目录生成查询输出 schema。
//! 段目录每次显式传入，不依赖任何全局注册表。

use std::collections::HashSet;

use crate::core::error::{QueryError, QueryResult};
use crate::core::schema::{ColumnSchema, DataSchema};
use crate::storage::SegmentMetadata;

/// 通配列名，单独出现时等价于空请求
pub const WILDCARD: &str = "*";

pub struct SchemaResolver;

impl SchemaResolver {
    /// 计算有效的选择列
    ///
    /// - 空请求或仅含 `*`：段的全部列，顺序为段声明顺序
    /// - 否则：按请求顺序去重，保留首次出现的位置
    ///
    /// 任意位置出现段中不存在的列都返回 `UnknownColumn`。
    pub fn selection_columns(
        requested: &[String],
        segment: &dyn SegmentMetadata,
    ) -> QueryResult<Vec<String>> {
        if Self::selects_all(requested) {
            return Ok(segment.columns().iter().map(|c| c.name.clone()).collect());
        }

        let mut seen = HashSet::with_capacity(requested.len());
        let mut columns = Vec::with_capacity(requested.len());
        for column in requested {
            if !segment.has_column(column) {
                return Err(QueryError::unknown_column(column, segment.segment_name()));
            }
            if seen.insert(column.as_str()) {
                columns.push(column.clone());
            }
        }
        Ok(columns)
    }

    /// 按给定列顺序从段目录中查出类型，生成 schema
    pub fn extract_data_schema(
        columns: &[String],
        segment: &dyn SegmentMetadata,
    ) -> QueryResult<DataSchema> {
        let resolved = columns
            .iter()
            .map(|name| {
                segment
                    .column(name)
                    .map(|c| ColumnSchema::new(name.clone(), c.data_type))
                    .ok_or_else(|| QueryError::unknown_column(name, segment.segment_name()))
            })
            .collect::<QueryResult<Vec<_>>>()?;
        DataSchema::new(resolved)
    }

    /// 解析请求列并生成 schema
    pub fn resolve(requested: &[String], segment: &dyn SegmentMetadata) -> QueryResult<DataSchema> {
        let columns = Self::selection_columns(requested, segment)?;
        Self::extract_data_schema(&columns, segment)
    }

    fn selects_all(requested: &[String]) -> bool {
        match requested {
            [] => true,
            [only] => only == WILDCARD,
            _ => false,
        }
    }
}
