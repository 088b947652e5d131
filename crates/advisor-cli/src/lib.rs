//! 奖学金评审命令行工具
//!
//! 收集申请人事实、加载规则集合、调用规则引擎并输出评审报告。

pub mod cli;
pub mod exit;
pub mod report;

/// 服务名，用于加载 config/{service_name}.toml
pub const SERVICE_NAME: &str = "scholarship-advisor";
