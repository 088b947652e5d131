//! 规则引擎
//!
//! 按优先级降序（同优先级保持输入顺序）评估全部规则，返回所有匹配的规则。
//! 单条规则内的条件按 AND 组合并短路求值；规则之间不短路。

use crate::evaluator::ConditionEvaluator;
use crate::models::{FactSet, Rule};
use std::cmp::Reverse;
use tracing::{debug, instrument};

/// 规则引擎
///
/// 无状态，不修改传入的规则和事实，可在多个线程间共享。
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// 评估规则集合，返回按优先级降序排列的匹配规则
    ///
    /// 规则集合为空或没有任何规则匹配时返回空列表。
    #[instrument(
        skip_all,
        fields(rules = rules.len(), facts = facts.len(), matched = tracing::field::Empty)
    )]
    pub fn evaluate<'a>(&self, rules: &'a [Rule], facts: &FactSet) -> Vec<&'a Rule> {
        let mut ordered: Vec<&Rule> = rules.iter().collect();
        // sort_by_key 是稳定排序，同优先级保持输入顺序
        ordered.sort_by_key(|rule| Reverse(rule.priority));

        let matched: Vec<&Rule> = ordered
            .into_iter()
            .filter(|rule| self.rule_matches(rule, facts))
            .collect();

        tracing::Span::current().record("matched", matched.len());
        matched
    }

    /// 单条规则是否匹配（所有条件都成立；无条件的规则恒匹配）
    pub fn rule_matches(&self, rule: &Rule, facts: &FactSet) -> bool {
        for (i, condition) in rule.conditions.iter().enumerate() {
            if !ConditionEvaluator::satisfies(condition, facts) {
                debug!(rule = %rule.name, condition = i, "AND 短路 - 条件不满足");
                return false;
            }
        }

        debug!(rule = %rule.name, priority = rule.priority, "规则匹配");
        true
    }
}
