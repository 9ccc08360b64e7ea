//! 空选择算子
//!
//! LIMIT <= 0 时的短路算子，只读取段元数据。

use log::debug;

use crate::core::error::DBResult;
use crate::core::schema::DataSchema;
use crate::query::executor::base::{ExecutionStatistics, Operator, ResultBlock};
use crate::storage::SegmentMetadata;

use super::schema_resolver::SchemaResolver;

const OPERATOR_NAME: &str = "EmptySelectionOperator";

/// EmptySelectionOperator - 空选择算子
///
/// 用于 LIMIT <= 0 的单段选择查询。跳过所有下层算子，不读取任何索引数据，
/// 直接返回 schema 和零行结果，相当于一次伪装成查询的元数据探查。
///
/// schema 和统计信息都在构造时计算，列错误在构造时即暴露。
/// 按约定只拉取一次：第一次返回零行块，之后返回 `None`。
#[derive(Debug)]
pub struct EmptySelectionOperator {
    data_schema: DataSchema,
    execution_statistics: ExecutionStatistics,
    produced: bool,
}

impl EmptySelectionOperator {
    pub fn new(segment: &dyn SegmentMetadata, selection_columns: &[String]) -> DBResult<Self> {
        let data_schema = SchemaResolver::resolve(selection_columns, segment)?;
        let execution_statistics = ExecutionStatistics::metadata_only(segment.total_row_count());
        debug!(
            "{} 构造完成: segment={}, columns={}, total_docs={}",
            OPERATOR_NAME,
            segment.segment_name(),
            data_schema.len(),
            execution_statistics.total_docs()
        );
        Ok(Self {
            data_schema,
            execution_statistics,
            produced: false,
        })
    }

    pub fn data_schema(&self) -> &DataSchema {
        &self.data_schema
    }
}

impl Operator for EmptySelectionOperator {
    fn next_block(&mut self) -> DBResult<Option<ResultBlock>> {
        if self.produced {
            return Ok(None);
        }
        self.produced = true;
        Ok(Some(ResultBlock::empty(self.data_schema.clone())))
    }

    fn name(&self) -> &str {
        OPERATOR_NAME
    }

    fn execution_statistics(&self) -> ExecutionStatistics {
        self.execution_statistics
    }
}
