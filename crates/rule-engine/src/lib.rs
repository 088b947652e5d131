//! 奖学金评审规则引擎
//!
//! 提供无状态的规则匹配能力，支持：
//! - JSON 规则定义（`[field, operator, value]` 条件数组）
//! - 数值优先的类型转换比较，失败时安全地判定为不满足
//! - 按优先级稳定排序并返回全部匹配规则

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod operators;
pub mod value;

pub use engine::RuleEngine;
pub use error::{Result, RuleError};
pub use evaluator::ConditionEvaluator;
pub use models::{Action, Condition, FactSet, RawCondition, Rule};
pub use operators::Operator;
pub use value::Scalar;
