use alnumsort::{fixtures, sort_tokens, Comparator, Direction, Variant};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn item_numbers(n: usize) -> Vec<String> {
    let base = fixtures::find("item numbers")
        .map(|case| case.tokens)
        .unwrap_or_default();
    (0..n)
        .map(|i| format!("{}{}", base[i % base.len()], i % 97))
        .collect()
}

fn bench_compare(c: &mut Criterion) {
    for variant in [Variant::Category, Variant::CharRun] {
        let comparator = Comparator::new(variant, Direction::Ascending);
        c.bench_function(&format!("compare {}", variant), |b| {
            b.iter(|| comparator.compare(black_box("PO1059EMGM17"), black_box("PO1059EMGM9")))
        });
    }
}

fn bench_sort(c: &mut Criterion) {
    let tokens = item_numbers(10_000);
    for variant in [Variant::Category, Variant::CharRun] {
        c.bench_function(&format!("sort 10k {}", variant), |b| {
            b.iter(|| sort_tokens(black_box(&tokens), variant, Direction::Ascending))
        });
    }
}

criterion_group!(benches, bench_compare, bench_sort);
criterion_main!(benches);
