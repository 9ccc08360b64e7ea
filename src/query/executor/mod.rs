//! 算子模块
//!
//! - base/       - 执行统计、结果块、算子 trait
//! - selection/  - 选择列解析、空选择算子
//! - combine.rs  - 跨段合并算子
//! - factory.rs  - 选择查询算子工厂
//! - explain.rs  - 算子树描述

pub mod base;
pub mod combine;
pub mod explain;
pub mod factory;
pub mod selection;

pub use base::{
    drain_blocks, BoxedOperator, ExecutionStatistics, Operator, ResultBlock, Row,
};
pub use combine::CombineOperator;
pub use explain::OperatorDescription;
pub use factory::{SelectionPlanner, SelectionRequest};
pub use selection::{EmptySelectionOperator, SchemaResolver};
