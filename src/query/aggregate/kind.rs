//! 聚合类型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{AggregateError, AggregateResult};

/// 可归约的聚合类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationKind {
    Sum,
    Count,
    Average,
    Max,
    Min,
    /// 百分位数，取值 0..=100
    Percentile(u8),
}

/// 归约规则族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionRule {
    /// 与覆盖率无关，原值返回（MAX / MIN）
    CoverageInvariant,
    /// 按覆盖率比例外推（SUM / COUNT）
    Proportional,
    /// 统计估计（AVERAGE / PERCENTILE）
    StatisticalEstimate,
}

impl AggregationKind {
    /// 名称字符串，用于错误信息
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// 检查是否落在支持的集合内
    pub fn validate(&self) -> AggregateResult<()> {
        match self {
            AggregationKind::Percentile(p) if *p > 100 => {
                Err(AggregateError::UnsupportedAggregationKind(self.name()))
            }
            _ => Ok(()),
        }
    }

    pub fn reduction_rule(&self) -> ReductionRule {
        match self {
            AggregationKind::Max | AggregationKind::Min => ReductionRule::CoverageInvariant,
            AggregationKind::Sum | AggregationKind::Count => ReductionRule::Proportional,
            AggregationKind::Average | AggregationKind::Percentile(_) => {
                ReductionRule::StatisticalEstimate
            }
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationKind::Sum => f.write_str("SUM"),
            AggregationKind::Count => f.write_str("COUNT"),
            AggregationKind::Average => f.write_str("AVG"),
            AggregationKind::Max => f.write_str("MAX"),
            AggregationKind::Min => f.write_str("MIN"),
            AggregationKind::Percentile(p) => write!(f, "PCT{}", p),
        }
    }
}

/// 按缓存层使用的度量函数名解析，不区分大小写
///
/// 支持 `SUM`、`COUNT`、`AVG`/`AVERAGE`、`MAX`、`MIN`、`PCT<p>`、
/// `PERCENTILE<p>`、`PERCENTILETDIGEST<p>`，其余名称均为不支持的聚合类型。
impl FromStr for AggregationKind {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let kind = match upper.as_str() {
            "SUM" => AggregationKind::Sum,
            "COUNT" => AggregationKind::Count,
            "AVG" | "AVERAGE" => AggregationKind::Average,
            "MAX" => AggregationKind::Max,
            "MIN" => AggregationKind::Min,
            other => {
                let digits = ["PERCENTILETDIGEST", "PERCENTILE", "PCT"]
                    .iter()
                    .find_map(|prefix| other.strip_prefix(prefix))
                    .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
                    .ok_or_else(|| AggregateError::UnsupportedAggregationKind(s.to_string()))?;
                let percentile = digits
                    .parse::<u8>()
                    .map_err(|_| AggregateError::UnsupportedAggregationKind(s.to_string()))?;
                AggregationKind::Percentile(percentile)
            }
        };
        kind.validate()?;
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric_function_names() {
        assert_eq!("SUM".parse::<AggregationKind>(), Ok(AggregationKind::Sum));
        assert_eq!("count".parse::<AggregationKind>(), Ok(AggregationKind::Count));
        assert_eq!("avg".parse::<AggregationKind>(), Ok(AggregationKind::Average));
        assert_eq!("Average".parse::<AggregationKind>(), Ok(AggregationKind::Average));
        assert_eq!("MAX".parse::<AggregationKind>(), Ok(AggregationKind::Max));
        assert_eq!(" min ".parse::<AggregationKind>(), Ok(AggregationKind::Min));
        assert_eq!("PCT50".parse::<AggregationKind>(), Ok(AggregationKind::Percentile(50)));
        assert_eq!(
            "percentile90".parse::<AggregationKind>(),
            Ok(AggregationKind::Percentile(90))
        );
        assert_eq!(
            "percentileTDigest99".parse::<AggregationKind>(),
            Ok(AggregationKind::Percentile(99))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        for name in ["MEDIAN", "DISTINCTCOUNT", "PCT", "PCT101", "PCT999", "PCTx5", ""] {
            assert!(
                matches!(
                    name.parse::<AggregationKind>(),
                    Err(AggregateError::UnsupportedAggregationKind(_))
                ),
                "{} 应该不被支持",
                name
            );
        }
    }

    #[test]
    fn test_percentile_out_of_range_is_unsupported() {
        assert!(AggregationKind::Percentile(100).validate().is_ok());
        assert_eq!(
            AggregationKind::Percentile(150).validate(),
            Err(AggregateError::UnsupportedAggregationKind("PCT150".to_string()))
        );
    }

    #[test]
    fn test_reduction_rules() {
        assert_eq!(AggregationKind::Max.reduction_rule(), ReductionRule::CoverageInvariant);
        assert_eq!(AggregationKind::Min.reduction_rule(), ReductionRule::CoverageInvariant);
        assert_eq!(AggregationKind::Sum.reduction_rule(), ReductionRule::Proportional);
        assert_eq!(AggregationKind::Count.reduction_rule(), ReductionRule::Proportional);
        assert_eq!(
            AggregationKind::Percentile(50).reduction_rule(),
            ReductionRule::StatisticalEstimate
        );
        assert_eq!(AggregationKind::Percentile(90).to_string(), "PCT90");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(format!("{}", AggregationKind::Sum), "SUM");
        assert_eq!(format!("{}", AggregationKind::Average), "AVG");
        assert_eq!(format!("{:>6}", AggregationKind::Min.name()), "   MIN");
        assert_eq!(AggregationKind::Percentile(7).name(), "PCT7");
        for kind in [
            AggregationKind::Count,
            AggregationKind::Max,
            AggregationKind::Percentile(95),
        ] {
            assert_eq!(kind.to_string().parse::<AggregationKind>(), Ok(kind));
        }
    }
}
