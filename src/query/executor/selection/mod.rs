//! 选择查询相关算子与工具

pub mod empty_selection;
pub mod schema_resolver;

pub use empty_selection::EmptySelectionOperator;
pub use schema_resolver::{SchemaResolver, WILDCARD};
