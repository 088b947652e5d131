//! 规则加载器
//!
//! 从 JSON 文本或文件加载规则集合与事实集合。结构不合法的输入在这里被拒绝，
//! 通过校验的规则中即使包含格式错误的条件，也交由引擎安全地判定为不匹配。

use std::fs;
use std::path::Path;

use rule_engine::{FactSet, Rule, Scalar};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::config::RulesConfig;
use crate::error::{Result, SharedError};

/// 规则加载器
pub struct RuleSetLoader;

impl RuleSetLoader {
    /// 从 JSON 字符串加载规则集合
    pub fn from_json(json: &str) -> Result<Vec<Rule>> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// 从 JSON 值加载规则集合，顶层必须是数组
    pub fn from_value(value: Value) -> Result<Vec<Rule>> {
        let Value::Array(entries) = value else {
            return Err(SharedError::RuleSet(format!(
                "规则集合必须是 JSON 数组，实际为 {}",
                json_type_name(&value)
            )));
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::from_value::<Rule>(entry)
                    .map_err(|e| SharedError::RuleSet(format!("第 {} 条规则无效: {}", i, e)))
            })
            .collect()
    }

    /// 从文件加载规则集合
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Vec<Rule>> {
        let json = read_file(path)?;
        let rules = Self::from_json(&json)?;
        info!(count = rules.len(), "规则集合已加载");
        Ok(rules)
    }

    /// 加载配置中的默认规则集合
    ///
    /// 默认文件不存在时返回空集合并记录警告，其他错误照常返回。
    pub fn load_default(config: &RulesConfig) -> Result<Vec<Rule>> {
        if !config.path.exists() {
            warn!(path = %config.path.display(), "默认规则文件不存在，使用空规则集合");
            return Ok(Vec::new());
        }

        Self::from_path(&config.path)
    }

    /// 从 JSON 字符串加载事实集合，顶层必须是对象且所有值均为标量
    pub fn facts_from_json(json: &str) -> Result<FactSet> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(SharedError::Facts(format!(
                "事实集合必须是 JSON 对象，实际为 {}",
                json_type_name(&value)
            )));
        };

        let mut facts = FactSet::new();
        for (field, value) in map {
            let scalar = Scalar::from_json(&value).ok_or_else(|| {
                SharedError::Facts(format!(
                    "字段 '{}' 的值必须是数字、字符串或布尔值，实际为 {}",
                    field,
                    json_type_name(&value)
                ))
            })?;
            facts.insert(field, scalar);
        }

        Ok(facts)
    }

    /// 从文件加载事实集合
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn facts_from_path(path: &Path) -> Result<FactSet> {
        let json = read_file(path)?;
        let facts = Self::facts_from_json(&json)?;
        info!(count = facts.len(), "事实集合已加载");
        Ok(facts)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SharedError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
