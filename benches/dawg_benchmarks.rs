use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use levdawg::dictionary::{Dawg, DawgBuilder};

/// Generate a sorted list of dictionary terms with heavily shared affixes.
fn generate_terms(size: usize) -> Vec<String> {
    let prefixes = [
        "pre", "un", "re", "in", "dis", "en", "non", "over", "mis", "sub",
    ];
    let roots = [
        "test", "code", "data", "work", "play", "read", "write", "run", "walk", "talk",
    ];
    let suffixes = [
        "ing", "ed", "er", "est", "ly", "ness", "ment", "tion", "able", "ful",
    ];

    let mut terms: Vec<String> = (0..size)
        .map(|i| {
            let prefix = prefixes[i % prefixes.len()];
            let root = roots[(i / prefixes.len()) % roots.len()];
            let suffix = suffixes[(i / (prefixes.len() * roots.len())) % suffixes.len()];
            format!("{}{}{}{}", prefix, root, suffix, i / 1000)
        })
        .collect();
    terms.sort();
    terms.dedup();
    terms
}

fn bench_dawg_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("dawg_construction");

    for size in [100, 1000, 10000].iter() {
        let terms = generate_terms(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_sorted", size), size, |b, _| {
            b.iter(|| black_box(Dawg::from_sorted(black_box(&terms))));
        });
        group.bench_with_input(BenchmarkId::new("builder", size), size, |b, _| {
            b.iter(|| {
                let mut builder = DawgBuilder::new();
                for term in &terms {
                    builder.insert(black_box(term));
                }
                black_box(builder.finish())
            });
        });
    }
    group.finish();
}

fn bench_dawg_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("dawg_accepts");

    for size in [100, 1000, 10000].iter() {
        let terms = generate_terms(*size);
        let dawg = Dawg::from_sorted(&terms);
        let probes: Vec<&str> = terms
            .iter()
            .step_by(terms.len() / 100 + 1)
            .map(|s| s.as_str())
            .collect();

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for probe in &probes {
                    black_box(dawg.accepts(black_box(probe)));
                }
            });
        });
    }
    group.finish();
}

fn bench_dawg_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("dawg_iteration");

    for size in [1000, 10000].iter() {
        let dawg = Dawg::from_sorted(generate_terms(*size));

        group.throughput(Throughput::Elements(dawg.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(dawg.iter().count()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_dawg_construction,
    bench_dawg_membership,
    bench_dawg_iteration
);
criterion_main!(benches);
