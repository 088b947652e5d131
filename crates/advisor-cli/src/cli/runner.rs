//! CLI 命令执行器
//!
//! 负责加载规则与事实（外部输入），调用规则引擎，并把报告写入输出流。

use std::io::Write;
use std::path::Path;

use advisory_shared::config::AppConfig;
use advisory_shared::rules::RuleSetLoader;
use anyhow::{Context, Result};
use rule_engine::{FactSet, Rule, RuleEngine};
use tracing::{info, warn};

use super::commands::{EvaluateArgs, ReportFormat};
use crate::report::Report;

/// 命令执行器
pub struct CommandRunner {
    config: AppConfig,
    engine: RuleEngine,
}

impl CommandRunner {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            engine: RuleEngine::new(),
        }
    }

    /// 执行 evaluate 命令
    pub fn run_evaluate(&self, args: &EvaluateArgs, out: &mut impl Write) -> Result<()> {
        let rules = self.load_rules(args.rules.as_deref())?;
        let facts = self.collect_facts(args)?;

        if rules.is_empty() {
            warn!("规则集合为空");
            writeln!(out, "No rules available. Please provide a valid rules JSON file.")?;
            return Ok(());
        }

        let matched = self.engine.evaluate(&rules, &facts);
        info!(
            rules = rules.len(),
            matched = matched.len(),
            "评审完成"
        );

        let report = Report::new(facts, &matched);
        let format = args
            .format
            .unwrap_or_else(|| ReportFormat::from(self.config.output.format));

        match format {
            ReportFormat::Text => report.write_text(out)?,
            ReportFormat::Json => report.write_json(out)?,
        }

        Ok(())
    }

    /// 执行 rules 命令
    pub fn run_rules(&self, rules_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
        let rules = self.load_rules(rules_path)?;
        serde_json::to_writer_pretty(&mut *out, &rules)?;
        writeln!(out)?;
        Ok(())
    }

    /// 加载规则集合：显式指定的文件必须存在，默认文件缺失时为空集合
    fn load_rules(&self, override_path: Option<&Path>) -> Result<Vec<Rule>> {
        match override_path {
            Some(path) => RuleSetLoader::from_path(path)
                .with_context(|| format!("加载规则文件失败: {}", path.display())),
            None => RuleSetLoader::load_default(&self.config.rules).with_context(|| {
                format!("加载默认规则失败: {}", self.config.rules.path.display())
            }),
        }
    }

    /// 构建事实集合：事实文件优先于表单参数，`--fact` 覆盖项最后合并
    fn collect_facts(&self, args: &EvaluateArgs) -> Result<FactSet> {
        match &args.facts {
            Some(path) => {
                let mut facts = RuleSetLoader::facts_from_path(path)
                    .with_context(|| format!("加载事实文件失败: {}", path.display()))?;
                facts.merge(args.override_facts());
                Ok(facts)
            }
            None => Ok(args.form_facts()),
        }
    }
}
