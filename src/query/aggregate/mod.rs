//! 部分聚合归约模块
//!
//! - kind.rs    - 聚合类型与归约规则族
//! - reducer.rs - 覆盖范围、部分聚合值和归约函数

pub mod kind;
pub mod reducer;

pub use kind::{AggregationKind, ReductionRule};
pub use reducer::{AggregateReducer, Coverage, PartialAggregate};
