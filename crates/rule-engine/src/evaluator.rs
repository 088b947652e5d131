//! 条件评估器
//!
//! 判定单个条件是否在事实集合上成立。
//!
//! 类型转换策略：只要条件值或事实值之一是数值（布尔值按 1 / 0 计），先尝试把两边都转为浮点数比较；
//! 任一侧转换失败时，回退为对原始值的直接比较。所有失败路径（格式错误、字段缺失、
//! 类型不可比较）都以 `Err` 显式返回，由 [`ConditionEvaluator::satisfies`] 折叠为 `false`。

use crate::error::{Result, RuleError};
use crate::models::{Condition, FactSet, RawCondition};
use crate::operators::Operator;
use crate::value::Scalar;
use tracing::debug;

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 条件是否成立，任何错误都视为不成立
    pub fn satisfies(condition: &RawCondition, facts: &FactSet) -> bool {
        match Self::evaluate(condition, facts) {
            Ok(matched) => matched,
            Err(e) => {
                debug!(condition = %condition.0, error = %e, "条件无法评估，视为不满足");
                false
            }
        }
    }

    /// 评估原始条件，返回未折叠的结果
    pub fn evaluate(condition: &RawCondition, facts: &FactSet) -> Result<bool> {
        let condition = condition.parse()?;
        Self::evaluate_condition(&condition, facts)
    }

    /// 评估已解析的条件
    pub fn evaluate_condition(condition: &Condition, facts: &FactSet) -> Result<bool> {
        let fact = facts
            .get(&condition.field)
            .ok_or_else(|| RuleError::FieldNotFound(condition.field.clone()))?;

        Self::compare(fact, condition.operator, &condition.value)
    }

    /// 比较事实值与条件值
    ///
    /// # Arguments
    /// * `fact` - 事实集合中的字段值
    /// * `operator` - 操作符
    /// * `expected` - 规则中定义的期望值
    pub fn compare(fact: &Scalar, operator: Operator, expected: &Scalar) -> Result<bool> {
        if fact.is_numeric() || expected.is_numeric() {
            if let (Some(left), Some(right)) = (fact.to_f64(), expected.to_f64()) {
                return Ok(operator.apply_f64(left, right));
            }
        }

        Self::compare_direct(fact, operator, expected)
    }

    /// 对原始值直接比较，不做类型转换
    fn compare_direct(fact: &Scalar, operator: Operator, expected: &Scalar) -> Result<bool> {
        match (fact, expected) {
            (Scalar::String(a), Scalar::String(b)) => {
                Ok(operator.apply_ord(a.as_str(), b.as_str()))
            }
            (Scalar::Boolean(a), Scalar::Boolean(b)) => Ok(operator.apply_ord(a, b)),
            (Scalar::Integer(a), Scalar::Integer(b)) => Ok(operator.apply_ord(a, b)),
            (Scalar::Float(a), Scalar::Float(b)) => Ok(operator.apply_f64(*a, *b)),
            // 不同类型的值永不相等
            _ if operator.is_equality() => Ok(operator == Operator::Ne),
            _ => Err(RuleError::Incomparable {
                left: fact.type_name().to_string(),
                operator: operator.to_string(),
                right: expected.type_name().to_string(),
            }),
        }
    }
}
