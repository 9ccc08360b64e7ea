//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use olapcore::core::schema::DataSchema;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言 schema 的列名与期望一致（含顺序）
pub fn assert_column_names(schema: &DataSchema, expected: &[&str]) {
    assert_eq!(schema.column_names(), expected, "schema 列名不匹配: {}", schema);
}

/// 断言浮点数近似相等
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "数值不匹配: 期望 {}, 实际 {}",
        expected,
        actual
    );
}
