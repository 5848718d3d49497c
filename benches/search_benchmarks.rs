//! Automaton search against a linear scan with the matching distance function.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use levdawg::prelude::*;

fn generate_terms(size: usize) -> Vec<String> {
    let base_words = [
        "algorithm", "structure", "computer", "science", "program", "function", "variable",
        "constant", "iterator", "reference", "pattern", "matching", "distance", "automaton",
        "transducer", "dictionary", "benchmark", "performance",
    ];
    let endings = ["", "s", "ed", "ing", "er", "ly"];

    (0..size)
        .map(|i| {
            let word = base_words[i % base_words.len()];
            let ending = endings[(i / base_words.len()) % endings.len()];
            format!("{}{}{}", word, ending, i / (base_words.len() * endings.len()))
        })
        .collect()
}

fn bench_search_by_algorithm(c: &mut Criterion) {
    let terms = generate_terms(5000);
    let queries = ["algoritm", "fucntion", "transduser", "dictionarry", "rn"];

    for algorithm in Algorithm::ALL {
        let transducer = TransducerBuilder::new()
            .words(terms.iter().cloned())
            .algorithm(algorithm)
            .build()
            .unwrap();

        let mut group = c.benchmark_group(format!("search_{}", algorithm));
        group.throughput(Throughput::Elements(queries.len() as u64));
        for max_distance in [1, 2, 3] {
            group.bench_with_input(
                BenchmarkId::from_parameter(max_distance),
                &max_distance,
                |b, &n| {
                    b.iter(|| {
                        for query in &queries {
                            black_box(transducer.search(black_box(query), n));
                        }
                    });
                },
            );
        }
        group.finish();
    }
}

fn bench_automaton_vs_linear_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("automaton_vs_linear_scan");

    for size in [500, 5000].iter() {
        let terms = generate_terms(*size);
        let transducer = TransducerBuilder::new()
            .words(terms.iter().cloned())
            .case_insensitive(false)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("automaton", size), size, |b, _| {
            b.iter(|| black_box(transducer.search(black_box("algoritm"), 2)));
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", size), size, |b, _| {
            b.iter(|| {
                let found: Vec<&String> = terms
                    .iter()
                    .filter(|t| edit_distance("algoritm", t, Algorithm::Standard) <= 2)
                    .collect();
                black_box(found)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_search_by_algorithm,
    bench_automaton_vs_linear_scan
);
criterion_main!(benches);
