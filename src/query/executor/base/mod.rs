//! 算子基础类型统一模块
//!
//! 模块结构：
//! - execution_stats.rs - 执行统计信息
//! - result_block.rs    - 结果块
//! - operator.rs        - 算子 trait

pub mod execution_stats;
pub mod operator;
pub mod result_block;

pub use execution_stats::ExecutionStatistics;
pub use operator::{drain_blocks, BoxedOperator, Operator};
pub use result_block::{ResultBlock, Row};
