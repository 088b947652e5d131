//! 规则引擎领域模型

use crate::error::{Result, RuleError};
use crate::operators::Operator;
use crate::value::Scalar;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 规则定义
///
/// 除 `name` 外所有字段都可缺省：`priority` 默认 0，`conditions` 默认为空（恒匹配）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub conditions: Vec<RawCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            conditions: Vec::new(),
            action: None,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_condition(mut self, condition: impl Into<RawCondition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn with_action(mut self, decision: impl Into<String>, reason: impl Into<String>) -> Self {
        self.action = Some(Action::new(decision, reason));
        self
    }

    /// 决策标签，缺少 action 或 decision 时返回 None
    pub fn decision(&self) -> Option<&str> {
        self.action.as_ref().and_then(|a| a.decision.as_deref())
    }

    /// 决策原因，缺少 action 时返回 None
    pub fn reason(&self) -> Option<&str> {
        self.action.as_ref().and_then(|a| a.reason.as_deref())
    }
}

/// 规则动作
///
/// 引擎不解释动作内容，匹配后原样返回。未知字段保存在 `extra` 中。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Action {
    pub fn new(decision: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            decision: Some(decision.into()),
            reason: Some(reason.into()),
            extra: Map::new(),
        }
    }
}

/// 未经校验的条件，期望形态为 JSON 数组 `[field, operator, value]`
///
/// 保留任意 JSON 原始形态，使格式错误的条件也能到达评估器并被判定为不满足。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCondition(pub Value);

impl RawCondition {
    /// 解析为类型化条件
    pub fn parse(&self) -> Result<Condition> {
        let Value::Array(items) = &self.0 else {
            return Err(RuleError::InvalidShape(self.0.to_string()));
        };
        let [field, operator, value] = items.as_slice() else {
            return Err(RuleError::InvalidArity(items.len()));
        };

        let field = field
            .as_str()
            .ok_or_else(|| RuleError::InvalidField(field.to_string()))?;

        let operator = match operator {
            Value::String(s) => s.parse::<Operator>()?,
            other => return Err(RuleError::UnknownOperator(other.to_string())),
        };

        let value = Scalar::from_json(value)
            .ok_or_else(|| RuleError::InvalidValue(value.to_string()))?;

        Ok(Condition {
            field: field.to_string(),
            operator,
            value,
        })
    }
}

impl From<Condition> for RawCondition {
    fn from(cond: Condition) -> Self {
        Self(Value::Array(vec![
            Value::String(cond.field),
            Value::String(cond.operator.symbol().to_string()),
            cond.value.to_json(),
        ]))
    }
}

/// 条件节点
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: Scalar,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Scalar>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 事实集合 - 提供给规则引擎的数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSet {
    facts: BTreeMap<String, Scalar>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.facts.insert(field.into(), value.into())
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Scalar> {
        self.facts.get(field)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scalar)> {
        self.facts.iter()
    }

    /// 合并另一个事实集合，同名字段以 `other` 为准
    pub fn merge(&mut self, other: FactSet) {
        self.facts.extend(other.facts);
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for FactSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            facts: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
