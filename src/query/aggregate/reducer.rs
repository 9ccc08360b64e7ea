//! 部分聚合归约
//!
//! 结果缓存只重新计算了请求窗口的一部分时，用已缓存的部分聚合值
//! 和覆盖范围外推出整个窗口的聚合值。归约是纯函数，没有共享状态，
//! 可以在多个缓存读取路径上并发调用。

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::error::{AggregateError, AggregateResult};

use super::kind::{AggregationKind, ReductionRule};

/// 覆盖范围：部分聚合值实际覆盖的子区间数 / 调用方期望代表的子区间数
///
/// 反序列化同样经过 `Coverage::new` 校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoverage")]
pub struct Coverage {
    numerator: i64,
    denominator: i64,
}

#[derive(Deserialize)]
struct RawCoverage {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<RawCoverage> for Coverage {
    type Error = AggregateError;

    fn try_from(raw: RawCoverage) -> Result<Self, Self::Error> {
        Coverage::new(raw.numerator, raw.denominator)
    }
}

impl Coverage {
    /// 要求 numerator > 0 且 denominator >= numerator
    pub fn new(numerator: i64, denominator: i64) -> AggregateResult<Self> {
        if numerator <= 0 || denominator < numerator {
            return Err(AggregateError::InvalidCoverage {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// 覆盖比例，取值 (0, 1]
    pub fn ratio(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn is_complete(&self) -> bool {
        self.numerator == self.denominator
    }
}

/// 缓存中的部分聚合值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialAggregate {
    pub value: f64,
    pub kind: AggregationKind,
}

impl PartialAggregate {
    pub fn new(value: f64, kind: AggregationKind) -> Self {
        Self { value, kind }
    }

    /// 按覆盖范围外推，返回新的聚合值
    pub fn extrapolate(&self, coverage: Coverage) -> AggregateResult<f64> {
        self.kind.validate()?;
        Ok(AggregateReducer::apply(self.value, coverage, self.kind))
    }
}

pub struct AggregateReducer;

impl AggregateReducer {
    /// 按聚合类型归约
    ///
    /// | 类型 | 规则 |
    /// |---|---|
    /// | MAX / MIN | 原值返回 |
    /// | SUM / COUNT | `value * denominator / numerator`，向零截断 |
    /// | AVERAGE / PERCENTILE | `value * (numerator + 2) / (denominator + 2)`，完整覆盖时原值返回 |
    ///
    /// 先校验聚合类型，再校验覆盖范围。
    pub fn reduce(
        value: f64,
        numerator: i64,
        denominator: i64,
        kind: AggregationKind,
    ) -> AggregateResult<f64> {
        kind.validate()?;
        let coverage = Coverage::new(numerator, denominator)?;
        Ok(Self::apply(value, coverage, kind))
    }

    /// 按度量函数名归约，名称解析规则见 `AggregationKind::from_str`
    pub fn reduce_named(
        value: f64,
        numerator: i64,
        denominator: i64,
        function: &str,
    ) -> AggregateResult<f64> {
        let kind: AggregationKind = function.parse()?;
        Self::reduce(value, numerator, denominator, kind)
    }

    fn apply(value: f64, coverage: Coverage, kind: AggregationKind) -> f64 {
        let numerator = coverage.numerator() as f64;
        let denominator = coverage.denominator() as f64;
        let reduced = match kind.reduction_rule() {
            ReductionRule::CoverageInvariant => value,
            ReductionRule::Proportional => (value * denominator / numerator).trunc(),
            ReductionRule::StatisticalEstimate if coverage.is_complete() => value,
            // 对覆盖比例做加二平滑后按比例缩放，对 value 线性
            ReductionRule::StatisticalEstimate => {
                value * (numerator + 2.0) / (denominator + 2.0)
            }
        };
        trace!(
            "归约 {}: value={}, coverage={}/{}, result={}",
            kind,
            value,
            coverage.numerator(),
            coverage.denominator(),
            reduced
        );
        reduced
    }
}
