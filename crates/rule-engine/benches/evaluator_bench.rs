//! 条件评估器与规则引擎性能基准测试
//!
//! 针对 ConditionEvaluator 的数值转换路径和 RuleEngine 的排序/过滤进行性能测试。

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rule_engine::{
    Condition, ConditionEvaluator, FactSet, Operator, RawCondition, Rule, RuleEngine, Scalar,
};
use serde_json::json;
use std::hint::black_box;

fn create_test_facts() -> FactSet {
    FactSet::new()
        .with("cgpa", 3.8)
        .with("family_income", 2000)
        .with("score", "75")
        .with("name", "applicant")
}

/// 数值比较操作基准
fn bench_numeric_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric_operations");

    let fact = Scalar::from(1000);
    let expected = Scalar::from(500);

    for op in Operator::ALL {
        group.bench_function(op.symbol(), |b| {
            b.iter(|| {
                ConditionEvaluator::compare(
                    black_box(&fact),
                    black_box(op),
                    black_box(&expected),
                )
            })
        });
    }

    group.finish();
}

/// 类型转换路径基准
fn bench_coercion_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("coercion_paths");

    let numeric_string = Scalar::from("75");
    let plain_string = Scalar::from("abc");
    let threshold = Scalar::from(50);

    group.bench_function("string_to_number", |b| {
        b.iter(|| {
            ConditionEvaluator::compare(
                black_box(&numeric_string),
                black_box(Operator::Ge),
                black_box(&threshold),
            )
        })
    });

    group.bench_function("failed_coercion_fallback", |b| {
        b.iter(|| {
            ConditionEvaluator::compare(
                black_box(&plain_string),
                black_box(Operator::Ge),
                black_box(&threshold),
            )
        })
    });

    group.bench_function("direct_string_eq", |b| {
        b.iter(|| {
            ConditionEvaluator::compare(
                black_box(&plain_string),
                black_box(Operator::Eq),
                black_box(&plain_string),
            )
        })
    });

    group.finish();
}

/// 原始条件解析 + 评估基准
fn bench_raw_conditions(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_conditions");

    let facts = create_test_facts();
    let valid: RawCondition = serde_json::from_value(json!(["cgpa", ">=", 3.5])).unwrap();
    let missing: RawCondition = serde_json::from_value(json!(["gpa", ">=", 3.5])).unwrap();
    let malformed: RawCondition = serde_json::from_value(json!(["cgpa", ">="])).unwrap();

    group.bench_function("valid", |b| {
        b.iter(|| ConditionEvaluator::satisfies(black_box(&valid), black_box(&facts)))
    });

    group.bench_function("missing_field", |b| {
        b.iter(|| ConditionEvaluator::satisfies(black_box(&missing), black_box(&facts)))
    });

    group.bench_function("malformed", |b| {
        b.iter(|| ConditionEvaluator::satisfies(black_box(&malformed), black_box(&facts)))
    });

    group.finish();
}

/// 规则集合规模对评估时间的影响
fn bench_rule_set_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_set_scaling");

    let facts = create_test_facts();

    for size in [10usize, 100, 1000].iter() {
        let rules: Vec<Rule> = (0..*size)
            .map(|i| {
                Rule::new(format!("rule_{}", i))
                    .with_priority((i % 7) as i64)
                    .with_condition(Condition::new("cgpa", Operator::Ge, 3.0))
                    .with_condition(Condition::new("family_income", Operator::Le, i as i64 * 10))
                    .with_action("AWARD", "bench")
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let engine = RuleEngine::new();
            b.iter(|| engine.evaluate(black_box(&rules), black_box(&facts)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_numeric_operations,
    bench_coercion_paths,
    bench_raw_conditions,
    bench_rule_set_scaling,
);

criterion_main!(benches);
