//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `evaluate` - 根据申请人事实评估规则集合
//! - `rules` - 输出当前生效的规则集合
//!
//! # 使用示例
//!
//! ```bash
//! # 使用默认规则评估
//! scholarship-advisor evaluate --cgpa 3.8 --family-income 2000
//!
//! # 从文件读取事实，并覆盖单个字段
//! scholarship-advisor evaluate --facts applicant.json --fact current_semester=1
//!
//! # 指定规则文件并以 JSON 输出
//! scholarship-advisor evaluate --rules my_rules.json --format json
//! ```

pub mod commands;
pub mod runner;

pub use commands::{ApplicantArgs, Cli, Commands, EvaluateArgs, ReportFormat};
pub use runner::CommandRunner;
