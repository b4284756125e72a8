//! Benchmarks for PSLQ searches at double precision.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use intrel_pslq::{find_relation_default_gamma, Pslq, PslqConfig};

/// `1, √p₁, …, √pₖ` followed by their sum, for the first `k` primes.
fn planted_sum(k: usize) -> Vec<f64> {
    let primes = [2.0_f64, 3.0, 5.0, 7.0, 11.0, 13.0];
    let mut values: Vec<f64> = std::iter::once(1.0)
        .chain(primes.iter().take(k).map(|p| p.sqrt()))
        .collect();
    values.push(values.iter().sum());
    values
}

fn bench_planted_relations(c: &mut Criterion) {
    let mut group = c.benchmark_group("pslq_planted");

    for k in [1, 2, 3, 4] {
        let x = planted_sum(k);
        group.bench_with_input(BenchmarkId::new("f64", x.len()), &x, |b, x| {
            b.iter(|| black_box(find_relation_default_gamma(x, 1000.0)))
        });
    }

    group.finish();
}

fn bench_exhaustion(c: &mut Criterion) {
    let mut group = c.benchmark_group("pslq_exhaustion");
    let pslq = Pslq::new(PslqConfig::new(1.0e5));

    for k in [1, 2, 3] {
        // Independent square roots: the search runs until the bound is reached.
        let mut x = planted_sum(k);
        x.pop();
        group.bench_with_input(BenchmarkId::new("f64", x.len()), &x, |b, x| {
            b.iter(|| black_box(pslq.search(x)))
        });
    }

    group.finish();
}

fn bench_invariant_checks(c: &mut Criterion) {
    let x = planted_sum(3);
    let plain = Pslq::new(PslqConfig::new(1000.0));
    let checked = Pslq::new(PslqConfig::paranoid(1000.0));

    c.bench_function("pslq_unchecked", |b| b.iter(|| black_box(plain.search(&x))));
    c.bench_function("pslq_checked", |b| b.iter(|| black_box(checked.search(&x))));
}

criterion_group!(benches, bench_planted_relations, bench_exhaustion, bench_invariant_checks);
criterion_main!(benches);
