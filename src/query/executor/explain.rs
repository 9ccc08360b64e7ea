//! 算子树描述
//!
//! 把算子树转换为可打印的描述结构，用于计划诊断。

use serde::{Deserialize, Serialize};

use crate::query::executor::base::{ExecutionStatistics, Operator};

/// 算子描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorDescription {
    pub name: String,
    pub statistics: ExecutionStatistics,
    pub children: Vec<OperatorDescription>,
}

impl OperatorDescription {
    /// 递归描述算子树
    pub fn describe(operator: &dyn Operator) -> Self {
        Self {
            name: operator.name().to_string(),
            statistics: operator.execution_statistics(),
            children: operator
                .children()
                .into_iter()
                .map(OperatorDescription::describe)
                .collect(),
        }
    }

    /// 树中算子总数
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// 缩进文本形式，每个算子一行
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        self.write_text(&mut output, 0);
        output
    }

    fn write_text(&self, output: &mut String, depth: usize) {
        output.push_str(&"  ".repeat(depth));
        output.push_str(&format!("{} ({})\n", self.name, self.statistics));
        for child in &self.children {
            child.write_text(output, depth + 1);
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DataType;
    use crate::query::executor::combine::CombineOperator;
    use crate::query::executor::selection::EmptySelectionOperator;
    use crate::storage::MemorySegment;

    #[test]
    fn test_describe_operator_tree() {
        let segment = MemorySegment::builder("seg_0")
            .column("country", DataType::String)
            .total_row_count(9)
            .build()
            .expect("段构建应该成功");
        let combine = CombineOperator::new(vec![
            Box::new(EmptySelectionOperator::new(&segment, &[]).expect("构造应该成功")),
            Box::new(EmptySelectionOperator::new(&segment, &[]).expect("构造应该成功")),
        ]);

        let description = OperatorDescription::describe(&combine);
        assert_eq!(description.name, "CombineOperator");
        assert_eq!(description.node_count(), 3);
        assert_eq!(description.children[0].statistics.total_docs(), 9);

        let text = description.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("CombineOperator"));
        assert!(lines[1].starts_with("  EmptySelectionOperator"));

        let json = description.to_json().expect("JSON 导出应该成功");
        assert!(json.contains("\"name\":\"EmptySelectionOperator\""));
    }
}
