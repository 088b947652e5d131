//! 评审报告
//!
//! 将规则引擎的匹配结果整理为文本或 JSON 报告。报告只展示匹配了哪些规则。

use std::io::Write;

use rule_engine::{FactSet, Rule};
use serde::Serialize;

/// 无任何规则匹配时的决策标签
pub const NO_DECISION: &str = "NO_DECISION";

/// 单条匹配规则
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedRule {
    pub name: String,
    pub priority: i64,
    pub decision: Option<String>,
    pub reason: Option<String>,
}

impl From<&Rule> for MatchedRule {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name.clone(),
            priority: rule.priority,
            decision: rule.decision().map(str::to_string),
            reason: rule.reason().map(str::to_string),
        }
    }
}

/// 评审报告
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub facts: FactSet,
    /// 最高优先级匹配规则的决策，无匹配时为 NO_DECISION
    pub decision: String,
    pub matched: Vec<MatchedRule>,
}

impl Report {
    pub fn new(facts: FactSet, matched: &[&Rule]) -> Self {
        let matched: Vec<MatchedRule> = matched.iter().map(|r| MatchedRule::from(*r)).collect();
        let decision = matched
            .first()
            .and_then(|m| m.decision.clone())
            .unwrap_or_else(|| NO_DECISION.to_string());

        Self {
            facts,
            decision,
            matched,
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Applicant facts:")?;
        for (field, value) in self.facts.iter() {
            writeln!(out, "  {}: {}", field, value)?;
        }
        writeln!(out)?;

        if self.matched.is_empty() {
            writeln!(out, "No matching rules. Decision: {}", NO_DECISION)?;
            return Ok(());
        }

        writeln!(
            out,
            "{} rule(s) matched. Showing highest-priority match first.",
            self.matched.len()
        )?;
        for rule in &self.matched {
            writeln!(out, "---")?;
            writeln!(out, "Rule: {}", rule.name)?;
            writeln!(out, "Priority: {}", rule.priority)?;
            writeln!(out, "Decision: {}", rule.decision.as_deref().unwrap_or("-"))?;
            writeln!(out, "Reason: {}", rule.reason.as_deref().unwrap_or("-"))?;
        }

        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
