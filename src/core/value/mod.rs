//! Value 模块 - 结果行单元格值

pub mod types;

pub use types::Value;
