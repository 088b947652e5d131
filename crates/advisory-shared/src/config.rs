//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::observability::ObservabilityConfig;

/// 规则来源配置
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// 默认规则集合文件（JSON 规则数组）
    pub path: PathBuf,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("config/rules.json"),
        }
    }
}

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 输出配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// 从指定目录加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. {config_dir}/default.toml（默认配置）
    /// 3. {config_dir}/{environment}.toml（环境特定配置，ADVISOR_ENV，默认 development）
    /// 4. {config_dir}/{service_name}.toml（服务特定配置）
    /// 5. 环境变量（ADVISOR__ 前缀，如 ADVISOR__RULES__PATH -> rules.path）
    pub fn load_from(service_name: &str, config_dir: &Path) -> Result<Self> {
        let env = std::env::var("ADVISOR_ENV").unwrap_or_else(|_| "development".to_string());
        let defaults = RulesConfig::default();
        let observability = ObservabilityConfig::default();

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .set_default("rules.path", defaults.path.to_string_lossy().to_string())?
            .set_default("observability.service_name", service_name)?
            .set_default("observability.log_level", observability.log_level)?
            .set_default("observability.log_format", observability.log_format)?
            .set_default("output.format", "text")?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            // 双下划线分隔层级，避免与字段名中的下划线冲突
            .add_source(
                Environment::with_prefix("ADVISOR")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
