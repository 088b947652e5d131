//! 规则与事实加载模块
//!
//! 在调用规则引擎之前完成输入的读取与结构校验，规则引擎本身不做任何 I/O。

pub mod loader;

pub use loader::RuleSetLoader;
