//! 执行统计信息
//!
//! 每次算子执行产出一次的扫描计数快照，供外部消费方做资源核算
//! （例如判断查询是否超出文档扫描预算）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 执行统计信息
///
/// 构造后不可变。计数之间唯一的硬性约束是
/// `total_docs >= max(docs_scanned, docs_scanned_after_filter)`；
/// 多值列下 `entries_scanned` 可能大于 `docs_scanned`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionStatistics {
    docs_scanned: u64,
    entries_scanned: u64,
    docs_scanned_after_filter: u64,
    total_docs: u64,
}

impl ExecutionStatistics {
    pub fn new(
        docs_scanned: u64,
        entries_scanned: u64,
        docs_scanned_after_filter: u64,
        total_docs: u64,
    ) -> Self {
        Self {
            docs_scanned,
            entries_scanned,
            docs_scanned_after_filter,
            total_docs,
        }
    }

    /// 未触碰任何数据时的统计：三个扫描计数为零，仅记录段总文档数
    pub fn metadata_only(total_docs: u64) -> Self {
        Self::new(0, 0, 0, total_docs)
    }

    /// 扫描的文档数
    pub fn docs_scanned(&self) -> u64 {
        self.docs_scanned
    }

    /// 扫描的值条目数
    pub fn entries_scanned(&self) -> u64 {
        self.entries_scanned
    }

    /// 过滤后扫描的文档数
    pub fn docs_scanned_after_filter(&self) -> u64 {
        self.docs_scanned_after_filter
    }

    /// 底层段的总文档数
    pub fn total_docs(&self) -> u64 {
        self.total_docs
    }

    /// 检查硬性约束
    pub fn is_consistent(&self) -> bool {
        self.total_docs >= self.docs_scanned.max(self.docs_scanned_after_filter)
    }

    /// 合并两个子树的统计（逐项求和）
    pub fn merge(&self, other: &ExecutionStatistics) -> ExecutionStatistics {
        ExecutionStatistics {
            docs_scanned: self.docs_scanned.saturating_add(other.docs_scanned),
            entries_scanned: self.entries_scanned.saturating_add(other.entries_scanned),
            docs_scanned_after_filter: self
                .docs_scanned_after_filter
                .saturating_add(other.docs_scanned_after_filter),
            total_docs: self.total_docs.saturating_add(other.total_docs),
        }
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 从 JSON 字符串导入
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for ExecutionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "docs_scanned: {}, entries_scanned: {}, docs_scanned_after_filter: {}, total_docs: {}",
            self.docs_scanned, self.entries_scanned, self.docs_scanned_after_filter, self.total_docs
        )
    }
}

impl std::iter::Sum for ExecutionStatistics {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ExecutionStatistics::default(), |acc, stats| acc.merge(&stats))
    }
}
