//! 统一错误处理模块
//!
//! 定义规则引擎外围（配置、日志、规则/事实加载）共享的错误类型。

use std::path::PathBuf;
use thiserror::Error;

/// 外围错误类型
#[derive(Debug, Error)]
pub enum SharedError {
    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    // ==================== 文件错误 ====================
    #[error("读取文件失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无效的 JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== 输入错误 ====================
    #[error("无效的规则集合: {0}")]
    RuleSet(String),

    #[error("无效的事实集合: {0}")]
    Facts(String),

    // ==================== 可观测性错误 ====================
    #[error("日志初始化失败: {0}")]
    Observability(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SharedError>;

impl SharedError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Json(_) => "INVALID_JSON",
            Self::RuleSet(_) => "INVALID_RULE_SET",
            Self::Facts(_) => "INVALID_FACTS",
            Self::Observability(_) => "OBSERVABILITY_ERROR",
        }
    }

    /// 是否为调用方输入错误（而非环境问题）
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::RuleSet(_) | Self::Facts(_))
    }
}
