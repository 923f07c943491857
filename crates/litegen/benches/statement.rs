use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use litegen::{Query, Value, placeholders};

/// Build an INSERT with `n` columns and `n` bound arguments.
fn build_insert(n: usize) -> Query {
    let fields: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let field_refs: Vec<&str> = fields.iter().map(|s| s.as_str()).collect();
    let values: Vec<Value> = (0..n as i64).map(Value::Int).collect();

    let mut q = Query::new();
    q.insert("t", &field_refs, values);
    q
}

/// Build a SELECT with `n` AND-chained WHERE fragments.
fn build_select(n: usize) -> Query {
    let mut q = Query::new();
    q.select("t", &["*"]);
    for i in 0..n {
        if i == 0 {
            q.where_clause(&format!("col{i} = ?"), [Value::Int(i as i64)]);
        } else {
            q.append(&format!("AND col{i} = ?"));
            q.bind(i as i64);
        }
    }
    q
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/insert");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_insert(n)));
        });
    }

    group.finish();
}

fn bench_select_where_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/select_where_chain");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n)));
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/build");

    for n in [1, 10, 100] {
        let q = build_insert(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_placeholders(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/placeholders");

    for n in [5, 20, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(placeholders(n)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_select_where_chain,
    bench_build,
    bench_placeholders
);
criterion_main!(benches);
