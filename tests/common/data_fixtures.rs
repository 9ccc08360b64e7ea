//! 测试数据夹具
//!
//! 构造固定列目录的内存段

use olapcore::core::error::DBResult;
use olapcore::core::schema::DataSchema;
use olapcore::core::types::DataType;
use olapcore::core::value::Value;
use olapcore::query::executor::base::{ExecutionStatistics, Operator, ResultBlock, Row};
use olapcore::storage::MemorySegment;

/// 广告点击段：country, clicks, impressions, tags
pub fn clicks_segment(name: &str, total_row_count: u64) -> MemorySegment {
    MemorySegment::builder(name)
        .column("country", DataType::String)
        .column("clicks", DataType::Long)
        .column("impressions", DataType::Long)
        .column("tags", DataType::StringArray)
        .total_row_count(total_row_count)
        .build()
        .expect("段构建应该成功")
}

/// 多种类型的段，覆盖单值和多值列
pub fn mixed_type_segment() -> MemorySegment {
    MemorySegment::builder("mixed_0")
        .column("id", DataType::Int)
        .column("ts", DataType::Timestamp)
        .column("score", DataType::Double)
        .column("active", DataType::Boolean)
        .column("payload", DataType::Json)
        .column("scores", DataType::DoubleArray)
        .total_row_count(12)
        .build()
        .expect("段构建应该成功")
}

/// 返回固定行的扫描算子替身
pub struct FixedRowsOperator {
    block: Option<ResultBlock>,
    statistics: ExecutionStatistics,
}

impl FixedRowsOperator {
    pub fn new(schema: DataSchema, rows: Vec<Row>, statistics: ExecutionStatistics) -> Self {
        Self {
            block: Some(ResultBlock::try_new(schema, rows).expect("行宽应该与 schema 一致")),
            statistics,
        }
    }
}

impl Operator for FixedRowsOperator {
    fn next_block(&mut self) -> DBResult<Option<ResultBlock>> {
        Ok(self.block.take())
    }

    fn name(&self) -> &str {
        "FixedRowsOperator"
    }

    fn execution_statistics(&self) -> ExecutionStatistics {
        self.statistics
    }
}

/// 单列字符串行
pub fn string_rows(values: &[&str]) -> Vec<Row> {
    values.iter().map(|v| vec![Value::from(*v)]).collect()
}
