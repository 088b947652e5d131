//! 默认规则集合集成测试
//!
//! 加载仓库自带的 config/rules.json 并用典型申请人验证评审结果。

use std::path::PathBuf;

use advisory_shared::config::RulesConfig;
use advisory_shared::rules::RuleSetLoader;
use rule_engine::{FactSet, RuleEngine};

fn default_rules_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/rules.json")
}

fn applicant(cgpa: f64, family_income: f64, disciplinary_actions: i64) -> FactSet {
    FactSet::new()
        .with("cgpa", cgpa)
        .with("family_income", family_income)
        .with("co_curricular_score", 50)
        .with("community_service_hours", 0)
        .with("current_semester", 3)
        .with("disciplinary_actions", disciplinary_actions)
}

fn decisions(facts: &FactSet) -> Vec<String> {
    let rules = RuleSetLoader::load_default(&RulesConfig {
        path: default_rules_path(),
    })
    .unwrap();

    RuleEngine::new()
        .evaluate(&rules, facts)
        .into_iter()
        .filter_map(|r| r.decision().map(str::to_string))
        .collect()
}

#[test]
fn test_default_rules_load() {
    let rules = RuleSetLoader::from_path(&default_rules_path()).unwrap();
    assert!(!rules.is_empty());
    assert!(rules.iter().all(|r| r.action.is_some()));
}

#[test]
fn test_high_merit_low_income() {
    assert_eq!(
        decisions(&applicant(3.8, 1500.0, 0)),
        vec!["AWARD_FULL", "AWARD_PARTIAL", "BURSARY"]
    );
}

#[test]
fn test_disciplinary_record_ranks_first() {
    let result = decisions(&applicant(3.8, 1500.0, 1));
    assert_eq!(result.first().map(String::as_str), Some("REJECT"));
}

#[test]
fn test_no_decision() {
    assert!(decisions(&applicant(2.0, 8000.0, 0)).is_empty());
}

#[test]
fn test_first_semester_review() {
    let mut facts = applicant(0.0, 8000.0, 0);
    facts.insert("current_semester", 1);
    assert_eq!(decisions(&facts), vec!["REVIEW"]);
}
