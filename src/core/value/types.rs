use serde::{Deserialize, Serialize};

use crate::core::types::DataType;

/// 结果行中的单元格值
///
/// 多值列的单元格用 `Array` 表示，元素为对应的单值类型。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// 毫秒时间戳
    Timestamp(i64),
    String(String),
    Json(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// 推断值对应的列类型
    ///
    /// `Null` 与空数组没有确定的类型，返回 `None`。
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Int(_) => Some(DataType::Int),
            Value::Long(_) => Some(DataType::Long),
            Value::Float(_) => Some(DataType::Float),
            Value::Double(_) => Some(DataType::Double),
            Value::Timestamp(_) => Some(DataType::Timestamp),
            Value::String(_) => Some(DataType::String),
            Value::Json(_) => Some(DataType::Json),
            Value::Bytes(_) => Some(DataType::Bytes),
            Value::Array(items) => match items.first().and_then(Value::data_type)? {
                DataType::Int => Some(DataType::IntArray),
                DataType::Long => Some(DataType::LongArray),
                DataType::Float => Some(DataType::FloatArray),
                DataType::Double => Some(DataType::DoubleArray),
                DataType::String => Some(DataType::StringArray),
                _ => None,
            },
        }
    }

    /// 值能否存入给定类型的列
    ///
    /// `Null` 可存入任意列；多值列的单元格必须是 `Array`，
    /// 其元素为 `Null` 或该列的元素类型。
    pub fn conforms_to(&self, data_type: DataType) -> bool {
        match self {
            Value::Null => true,
            Value::Array(items) => {
                let element = Some(data_type.element_type());
                data_type.is_multi_value()
                    && items
                        .iter()
                        .all(|item| item.is_null() || item.data_type() == element)
            }
            other => data_type.is_single_value() && other.data_type() == Some(data_type),
        }
    }

    /// 诊断输出用的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            // 只有空数组或元素类型无法推断的数组没有确定类型
            _ => self.data_type().map_or("ARRAY", |t| t.name()),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_data_type() {
        assert_eq!(Value::from(3i64).data_type(), Some(DataType::Long));
        assert_eq!(Value::from("x").data_type(), Some(DataType::String));
        assert_eq!(Value::Null.data_type(), None);
        assert_eq!(
            Value::Array(vec![Value::Int(1), Value::Int(2)]).data_type(),
            Some(DataType::IntArray)
        );
        assert_eq!(Value::Array(Vec::new()).data_type(), None);
    }

    #[test]
    fn test_value_conforms_to_column_type() {
        assert!(Value::Null.conforms_to(DataType::Long));
        assert!(Value::Long(1).conforms_to(DataType::Long));
        assert!(!Value::Int(1).conforms_to(DataType::Long));
        assert!(!Value::Long(1).conforms_to(DataType::LongArray));

        let tags = Value::Array(vec![Value::from("a"), Value::Null, Value::from("b")]);
        assert!(tags.conforms_to(DataType::StringArray));
        assert!(!tags.conforms_to(DataType::String));
        assert!(!tags.conforms_to(DataType::IntArray));
        assert!(Value::Array(Vec::new()).conforms_to(DataType::DoubleArray));
        let nested = Value::Array(vec![Value::Array(vec![Value::Int(1)])]);
        assert!(!nested.conforms_to(DataType::IntArray));

        assert_eq!(Value::Double(1.0).type_name(), "DOUBLE");
        assert_eq!(Value::Array(vec![Value::Int(1)]).type_name(), "INT_ARRAY");
        assert_eq!(Value::Array(Vec::new()).type_name(), "ARRAY");
    }
}
