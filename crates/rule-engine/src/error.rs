//! 规则引擎错误类型
//!
//! 这些错误只出现在显式的比较/解析结果上，`satisfies` 与 `RuleEngine::evaluate`
//! 会把它们折叠为“条件不满足”，不会向调用方抛出。

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("条件必须是 [字段, 操作符, 值] 数组: {0}")]
    InvalidShape(String),

    #[error("条件格式错误: 需要 3 个元素, 实际 {0} 个")]
    InvalidArity(usize),

    #[error("条件字段必须是字符串: {0}")]
    InvalidField(String),

    #[error("无效的操作符: {0}")]
    UnknownOperator(String),

    #[error("条件值必须是标量: {0}")]
    InvalidValue(String),

    #[error("字段不存在: {0}")]
    FieldNotFound(String),

    #[error("类型不可比较: {left} {operator} {right}")]
    Incomparable {
        left: String,
        operator: String,
        right: String,
    },
}

pub type Result<T> = std::result::Result<T, RuleError>;
