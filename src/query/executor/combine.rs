//! 跨段合并算子

use log::debug;

use crate::core::error::{DBResult, QueryError};
use crate::core::schema::DataSchema;
use crate::query::executor::base::{
    BoxedOperator, ExecutionStatistics, Operator, ResultBlock, Row,
};

const OPERATOR_NAME: &str = "CombineOperator";

/// CombineOperator - 合并算子
///
/// 独占若干子算子（通常每个段一个），第一次拉取时依次拉空所有子算子，
/// 把行拼接为一个结果块；之后返回 `None`。所有子结果块的 schema 必须一致。
///
/// 统计信息在拉取过程中按子算子累加，拉取前为全零。
pub struct CombineOperator {
    children: Vec<BoxedOperator>,
    execution_statistics: ExecutionStatistics,
    done: bool,
}

impl CombineOperator {
    pub fn new(children: Vec<BoxedOperator>) -> Self {
        Self {
            children,
            execution_statistics: ExecutionStatistics::default(),
            done: false,
        }
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    fn combine(&mut self) -> DBResult<Option<ResultBlock>> {
        let mut schema: Option<DataSchema> = None;
        let mut rows: Vec<Row> = Vec::new();
        let mut statistics = ExecutionStatistics::default();

        for child in self.children.iter_mut() {
            while let Some(block) = child.next_block()? {
                let (block_schema, block_rows) = block.into_parts();
                match &schema {
                    Some(expected) if *expected != block_schema => {
                        return Err(QueryError::SchemaConflict {
                            operator: child.name().to_string(),
                            expected: expected.to_string(),
                            actual: block_schema.to_string(),
                        }
                        .into());
                    }
                    Some(_) => {}
                    None => schema = Some(block_schema),
                }
                rows.extend(block_rows);
            }
            statistics = statistics.merge(&child.execution_statistics());
            debug!(
                "{} 子算子 {} 拉取完成，累计行数 {}",
                OPERATOR_NAME,
                child.name(),
                rows.len()
            );
        }

        self.execution_statistics = statistics;
        match schema {
            Some(schema) => Ok(Some(ResultBlock::try_new(schema, rows)?)),
            None => Ok(None),
        }
    }
}

impl Operator for CombineOperator {
    fn next_block(&mut self) -> DBResult<Option<ResultBlock>> {
        if self.done {
            return Ok(None);
        }
        self.done = true;
        self.combine()
    }

    fn name(&self) -> &str {
        OPERATOR_NAME
    }

    fn execution_statistics(&self) -> ExecutionStatistics {
        self.execution_statistics
    }

    fn children(&self) -> Vec<&dyn Operator> {
        self.children.iter().map(|c| c.as_ref() as &dyn Operator).collect()
    }
}
