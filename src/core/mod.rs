pub mod error;
pub mod schema;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{
    AggregateError, AggregateResult, DBError, DBResult, ErrorCode, PublicError, QueryError,
    QueryResult, ToPublicError,
};

// 核心数据类型
pub use schema::{ColumnSchema, DataSchema};
pub use types::DataType;
pub use value::Value;
