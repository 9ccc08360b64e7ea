//! 算子工厂模块
//!
//! 负责为选择查询创建单段算子和跨段合并算子。
//! 过滤、投影、扫描等常规算子由外部提供，这里只决定是否短路。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::DBResult;
use crate::query::executor::base::BoxedOperator;
use crate::query::executor::combine::CombineOperator;
use crate::query::executor::selection::EmptySelectionOperator;
use crate::storage::SegmentMetadata;

/// 选择查询请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// 请求列，空表示全部列
    pub columns: Vec<String>,
    /// 行数上限，<= 0 时短路
    pub limit: i64,
}

impl SelectionRequest {
    pub fn new(columns: Vec<String>, limit: i64) -> Self {
        Self { columns, limit }
    }

    /// 选择全部列
    pub fn all_columns(limit: i64) -> Self {
        Self {
            columns: Vec::new(),
            limit,
        }
    }

    /// 是否可以不读取任何数据直接回答
    pub fn is_short_circuit(&self) -> bool {
        self.limit <= 0
    }
}

pub struct SelectionPlanner;

impl SelectionPlanner {
    /// 为单个段创建选择算子
    ///
    /// LIMIT <= 0 时返回 `EmptySelectionOperator`，否则交给外部扫描算子构造函数。
    pub fn create_segment_operator<F>(
        segment: &dyn SegmentMetadata,
        request: &SelectionRequest,
        scan: F,
    ) -> DBResult<BoxedOperator>
    where
        F: FnOnce(&dyn SegmentMetadata, &SelectionRequest) -> DBResult<BoxedOperator>,
    {
        if request.is_short_circuit() {
            debug!(
                "段 {} 的选择查询 limit={}，使用空选择算子",
                segment.segment_name(),
                request.limit
            );
            return Ok(Box::new(EmptySelectionOperator::new(segment, &request.columns)?));
        }
        scan(segment, request)
    }

    /// 为多个段创建合并算子，每个段一个子算子
    pub fn plan_segments<F>(
        segments: &[&dyn SegmentMetadata],
        request: &SelectionRequest,
        mut scan: F,
    ) -> DBResult<CombineOperator>
    where
        F: FnMut(&dyn SegmentMetadata, &SelectionRequest) -> DBResult<BoxedOperator>,
    {
        let children = segments
            .iter()
            .map(|segment| Self::create_segment_operator(*segment, request, &mut scan))
            .collect::<DBResult<Vec<_>>>()?;
        Ok(CombineOperator::new(children))
    }
}
