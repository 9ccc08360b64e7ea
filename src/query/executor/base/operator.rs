//! 算子 trait
//!
//! 算子组成树状结构，消费方从根算子反复拉取结果块直到耗尽。
//! 每个算子独占自己的子算子，不存在共享或环；丢弃根算子即释放整棵树。

use crate::core::error::DBResult;

use super::execution_stats::ExecutionStatistics;
use super::result_block::ResultBlock;

/// 统一的算子 trait
///
/// 算子树是单线程、单消费方的拉取流水线，内部没有并行。
pub trait Operator: Send {
    /// 拉取下一个结果块
    ///
    /// 返回 `Ok(Some(block))` 表示产出一个块，`Ok(None)` 表示序列已耗尽。
    /// 耗尽后继续调用的行为由具体算子自行说明。
    fn next_block(&mut self) -> DBResult<Option<ResultBlock>>;

    /// 稳定的算子名称，用于计划诊断
    fn name(&self) -> &str;

    /// 执行统计快照
    ///
    /// 可以在构造时预先计算，也可以根据已拉取的数据按需推导。
    fn execution_statistics(&self) -> ExecutionStatistics;

    /// 直接子算子
    fn children(&self) -> Vec<&dyn Operator> {
        Vec::new()
    }
}

/// 动态分发的算子
pub type BoxedOperator = Box<dyn Operator>;

impl<T: Operator + ?Sized> Operator for Box<T> {
    fn next_block(&mut self) -> DBResult<Option<ResultBlock>> {
        (**self).next_block()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn execution_statistics(&self) -> ExecutionStatistics {
        (**self).execution_statistics()
    }

    fn children(&self) -> Vec<&dyn Operator> {
        (**self).children()
    }
}

/// 拉取算子的全部结果块
pub fn drain_blocks(operator: &mut dyn Operator) -> DBResult<Vec<ResultBlock>> {
    let mut blocks = Vec::new();
    while let Some(block) = operator.next_block()? {
        blocks.push(block);
    }
    Ok(blocks)
}
