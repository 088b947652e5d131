//! 共享库
//!
//! 包含规则引擎外围共用的配置、错误处理、日志初始化以及规则/事实加载代码。

pub mod config;
pub mod error;
pub mod observability;
pub mod rules;

pub use error::{Result, SharedError};
