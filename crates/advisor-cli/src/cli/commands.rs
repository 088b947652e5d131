//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 申请人表单参数带有取值范围校验，越界输入在进入规则引擎前即被拒绝。

use std::path::PathBuf;

use advisory_shared::config::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rule_engine::{FactSet, Scalar};

/// 奖学金评审命令行工具
///
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "scholarship-advisor")]
#[command(version, about = "奖学金评审规则引擎命令行工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，未指定时使用配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// 配置目录
    #[arg(long, global = true, env = "CONFIG_DIR", default_value = "config")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 评估申请人事实，输出全部匹配规则（高优先级在前）
    Evaluate(EvaluateArgs),

    /// 输出当前生效的规则集合（格式化 JSON）
    Rules {
        /// 规则文件（JSON 数组），默认使用配置中的 rules.path
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
}

/// evaluate 子命令参数
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub applicant: ApplicantArgs,

    /// 从 JSON 文件读取事实集合（替代申请人表单参数）
    #[arg(long)]
    pub facts: Option<PathBuf>,

    /// 添加或覆盖单个事实，格式 key=value（可重复）
    #[arg(long = "fact", value_name = "KEY=VALUE", value_parser = parse_fact)]
    pub overrides: Vec<(String, Scalar)>,

    /// 规则文件（JSON 数组），默认使用配置中的 rules.path
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// 报告格式，默认使用配置中的 output.format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

impl EvaluateArgs {
    /// 未提供事实文件时，由表单参数与覆盖项构建事实集合
    pub fn form_facts(&self) -> FactSet {
        let mut facts = self.applicant.to_facts();
        facts.merge(self.override_facts());
        facts
    }

    /// 仅由 `--fact` 覆盖项构成的事实集合
    pub fn override_facts(&self) -> FactSet {
        self.overrides.iter().cloned().collect()
    }
}

/// 申请人表单
#[derive(Args, Debug, Clone)]
pub struct ApplicantArgs {
    /// 累积绩点 CGPA (0.0-4.0)
    #[arg(long, default_value = "3.0", value_parser = parse_cgpa)]
    pub cgpa: f64,

    /// 家庭月收入（MYR）
    #[arg(long, default_value = "5000", value_parser = parse_non_negative)]
    pub family_income: f64,

    /// 课外活动得分 (0-100)
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(i64).range(0..=100))]
    pub co_curricular_score: i64,

    /// 社区服务时长（小时）
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(i64).range(0..))]
    pub community_service_hours: i64,

    /// 当前学期
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(i64).range(1..))]
    pub current_semester: i64,

    /// 违纪次数
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(i64).range(0..))]
    pub disciplinary_actions: i64,
}

impl ApplicantArgs {
    pub fn to_facts(&self) -> FactSet {
        FactSet::new()
            .with("cgpa", self.cgpa)
            .with("family_income", self.family_income)
            .with("co_curricular_score", self.co_curricular_score)
            .with("community_service_hours", self.community_service_hours)
            .with("current_semester", self.current_semester)
            .with("disciplinary_actions", self.disciplinary_actions)
    }
}

/// 报告格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

fn parse_cgpa(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("无效的数字: {}", s))?;
    if (0.0..=4.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("CGPA 必须在 0.0 到 4.0 之间，实际为 {}", value))
    }
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("无效的数字: {}", s))?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("不能为负数: {}", value))
    }
}

/// 解析 key=value 形式的事实
///
/// 值依次尝试解析为整数、浮点数、布尔值，都失败时作为字符串。
pub fn parse_fact(s: &str) -> Result<(String, Scalar), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("事实格式应为 key=value: {}", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("事实字段名不能为空: {}", s));
    }

    let scalar = if let Ok(i) = value.parse::<i64>() {
        Scalar::Integer(i)
    } else if let Ok(f) = value.parse::<f64>() {
        Scalar::Float(f)
    } else if let Ok(b) = value.parse::<bool>() {
        Scalar::Boolean(b)
    } else {
        Scalar::String(value.to_string())
    };

    Ok((key.to_string(), scalar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fact() {
        assert_eq!(parse_fact("cgpa=3.5").unwrap(), ("cgpa".to_string(), Scalar::Float(3.5)));
        assert_eq!(parse_fact("n=3").unwrap(), ("n".to_string(), Scalar::Integer(3)));
        assert_eq!(parse_fact("ok=true").unwrap(), ("ok".to_string(), Scalar::Boolean(true)));
        assert_eq!(
            parse_fact("major=computer science").unwrap(),
            ("major".to_string(), Scalar::from("computer science"))
        );
        assert_eq!(parse_fact("note=a=b").unwrap().1, Scalar::from("a=b"));
        assert!(parse_fact("cgpa").is_err());
        assert!(parse_fact("=3").is_err());
    }

    #[test]
    fn test_defaults_match_form() {
        let cli = Cli::try_parse_from(["scholarship-advisor", "evaluate"]).unwrap();
        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate");
        };

        let facts = args.form_facts();
        assert_eq!(facts.get("cgpa"), Some(&Scalar::Float(3.0)));
        assert_eq!(facts.get("family_income"), Some(&Scalar::Float(5000.0)));
        assert_eq!(facts.get("current_semester"), Some(&Scalar::Integer(1)));
        assert_eq!(facts.len(), 6);
    }

    #[test]
    fn test_overrides_win() {
        let cli = Cli::try_parse_from([
            "scholarship-advisor",
            "evaluate",
            "--cgpa",
            "3.9",
            "--fact",
            "cgpa=2.0",
            "--fact",
            "nationality=MY",
        ])
        .unwrap();
        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate");
        };

        let facts = args.form_facts();
        assert_eq!(facts.get("cgpa"), Some(&Scalar::Float(2.0)));
        assert_eq!(facts.get("nationality"), Some(&Scalar::from("MY")));
    }

    #[test]
    fn test_range_validation() {
        assert!(Cli::try_parse_from(["scholarship-advisor", "evaluate", "--cgpa", "4.5"]).is_err());
        assert!(
            Cli::try_parse_from(["scholarship-advisor", "evaluate", "--family-income", "-1"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["scholarship-advisor", "evaluate", "--co-curricular-score", "101"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from(["scholarship-advisor", "evaluate", "--current-semester", "0"])
                .is_err()
        );
    }
}
