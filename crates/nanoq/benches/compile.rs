use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nanoq::clause::{WhereClause, eq, in_list};
use nanoq::{Compiler, Query, QueryBuilder};

/// SELECT col0, col1, ... FROM t WHERE col0 = ? AND col1 = ? ...
fn build_select(n: usize) -> Query {
    let mut cols = QueryBuilder::joined(", ");
    for i in 0..n {
        cols.raw(format!("col{i}"));
    }
    let mut filter = QueryBuilder::joined(" AND ");
    for i in 0..n {
        filter.raw(
            QueryBuilder::new()
                .with_raw(format!("col{i} = "))
                .with_value(i as i64),
        );
    }
    QueryBuilder::new()
        .with_raw("SELECT ")
        .with_raw(cols)
        .with_raw(" FROM t WHERE ")
        .with_raw(filter)
        .into_query()
}

/// `depth` levels of `(... AND x = ?)`.
fn build_nested(depth: usize) -> Query {
    let mut q = QueryBuilder::new().with_raw("x = ").with_value(0).into_query();
    for i in 1..depth {
        q = QueryBuilder::new()
            .with_raw("(")
            .with_raw(q)
            .with_raw(format!(" AND x{i} = "))
            .with_value(i as i64)
            .with_raw(")")
            .into_query();
    }
    q
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/select");
    let compiler = Compiler::numbered();

    for n in [1, 5, 10, 50, 100] {
        let q = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(compiler.compile(q)));
        });
    }

    group.finish();
}

fn bench_build_and_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/build_and_compile");
    let compiler = Compiler::new();

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(compiler.compile(&build_select(n))));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/nested");
    let compiler = Compiler::numbered();

    for depth in [4, 16, 64, 256] {
        let q = build_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &q, |b, q| {
            b.iter(|| black_box(compiler.compile(q)));
        });
    }

    group.finish();
}

fn bench_normalized(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/normalized");
    let compiler = Compiler::numbered().normalize_whitespace(true);

    for n in [10, 100] {
        let q = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(compiler.compile(q)));
        });
    }

    group.finish();
}

fn bench_where_clause(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/where_clause");
    let compiler = Compiler::numbered();

    for n in [1, 5, 10, 50] {
        let ids: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &ids, |b, ids| {
            b.iter(|| {
                let mut w = WhereClause::new();
                for (i, id) in ids.iter().enumerate() {
                    if let Ok(cond) = eq(format!("col{i}"), *id) {
                        w = w.and(cond);
                    }
                }
                if let Ok(cond) = in_list("id", ids.iter().copied()) {
                    w = w.and(cond);
                }
                black_box(compiler.compile(&w));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compile,
    bench_build_and_compile,
    bench_nested,
    bench_normalized,
    bench_where_clause
);
criterion_main!(benches);
