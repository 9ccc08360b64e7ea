//! 结果块
//!
//! 算子产出的最小单位：一个 schema 加若干行。

use crate::core::error::{QueryError, QueryResult};
use crate::core::schema::DataSchema;
use crate::core::value::Value;

/// 结果行
pub type Row = Vec<Value>;

/// 不可变结果块
///
/// 每一行的列数必须等于 schema 列数，每个单元格必须符合对应列的类型，构造时校验。
/// 零行的块是合法的，与“没有产出块”不同。
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBlock {
    schema: DataSchema,
    rows: Vec<Row>,
}

impl ResultBlock {
    pub fn try_new(schema: DataSchema, rows: Vec<Row>) -> QueryResult<Self> {
        let expected = schema.len();
        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(QueryError::SchemaRowMismatch {
                row,
                expected,
                actual,
            });
        }
        for (row, values) in rows.iter().enumerate() {
            for (column, value) in schema.columns().iter().zip(values) {
                if !value.conforms_to(column.data_type) {
                    return Err(QueryError::CellTypeMismatch {
                        row,
                        column: column.name.clone(),
                        expected: column.data_type,
                        actual: value.type_name().to_string(),
                    });
                }
            }
        }
        Ok(Self { schema, rows })
    }

    /// 只携带 schema 的零行块
    pub fn empty(schema: DataSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn schema(&self) -> &DataSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// 获取行数
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_parts(self) -> (DataSchema, Vec<Row>) {
        (self.schema, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::ColumnSchema;
    use crate::core::types::DataType;

    fn two_column_schema() -> DataSchema {
        DataSchema::new(vec![
            ColumnSchema::new("country", DataType::String),
            ColumnSchema::new("clicks", DataType::Long),
        ])
        .expect("schema 构造应该成功")
    }

    #[test]
    fn test_block_with_matching_rows() {
        let block = ResultBlock::try_new(
            two_column_schema(),
            vec![
                vec![Value::from("us"), Value::Long(3)],
                vec![Value::from("de"), Value::Null],
            ],
        )
        .expect("结果块构造应该成功");
        assert_eq!(block.num_rows(), 2);
        assert_eq!(block.schema().len(), 2);
    }

    #[test]
    fn test_block_rejects_short_row() {
        let result = ResultBlock::try_new(
            two_column_schema(),
            vec![
                vec![Value::from("us"), Value::Long(3)],
                vec![Value::from("de")],
            ],
        );
        assert_eq!(
            result,
            Err(QueryError::SchemaRowMismatch {
                row: 1,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_block_rejects_wide_row() {
        let result = ResultBlock::try_new(
            two_column_schema(),
            vec![vec![Value::from("us"), Value::Long(3), Value::Int(1)]],
        );
        assert!(matches!(
            result,
            Err(QueryError::SchemaRowMismatch { row: 0, expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_block_rejects_cell_of_wrong_type() {
        let result = ResultBlock::try_new(
            two_column_schema(),
            vec![
                vec![Value::from("us"), Value::Long(3)],
                vec![Value::from("de"), Value::from("many")],
            ],
        );
        assert_eq!(
            result,
            Err(QueryError::CellTypeMismatch {
                row: 1,
                column: "clicks".to_string(),
                expected: DataType::Long,
                actual: "STRING".to_string(),
            })
        );
    }

    #[test]
    fn test_block_accepts_multi_value_cells() {
        let schema = DataSchema::new(vec![
            ColumnSchema::new("id", DataType::Int),
            ColumnSchema::new("tags", DataType::StringArray),
        ])
        .expect("schema 构造应该成功");
        let block = ResultBlock::try_new(
            schema.clone(),
            vec![
                vec![Value::Int(1), Value::Array(vec![Value::from("a"), Value::from("b")])],
                vec![Value::Int(2), Value::Array(Vec::new())],
                vec![Value::Null, Value::Null],
            ],
        )
        .expect("结果块构造应该成功");
        assert_eq!(block.num_rows(), 3);

        let scalar_in_array_column =
            ResultBlock::try_new(schema, vec![vec![Value::Int(3), Value::from("a")]]);
        assert!(matches!(
            scalar_in_array_column,
            Err(QueryError::CellTypeMismatch { row: 0, .. })
        ));
    }

    #[test]
    fn test_empty_block_is_valid() {
        let block = ResultBlock::empty(two_column_schema());
        assert!(block.is_empty());
        let built = ResultBlock::try_new(two_column_schema(), Vec::new()).expect("零行块应该合法");
        assert_eq!(block, built);
    }
}
