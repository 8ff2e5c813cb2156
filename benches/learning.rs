use concept_learn::learning::{candidate_elimination, find_s};
use concept_learn::ExampleTable;
use criterion::{criterion_group, criterion_main, Criterion};

fn weather_rows(n_rows: usize) -> Vec<Vec<String>> {
    let outlooks = ["sunny", "rainy", "cloudy"];
    let temps = ["warm", "cold"];
    let humidity = ["normal", "high"];
    (0..n_rows)
        .map(|i| {
            vec![
                outlooks[i % outlooks.len()].to_string(),
                temps[i % temps.len()].to_string(),
                humidity[i % humidity.len()].to_string(),
                if i % 3 == 0 { "YES" } else { "NO" }.to_string(),
            ]
        })
        .collect()
}

fn bench_candidate_elimination(c: &mut Criterion) {
    let table = ExampleTable::from_rows(weather_rows(256)).unwrap();
    c.bench_function("candidate_elimination_256_rows", |b| {
        b.iter(|| candidate_elimination::learn(&table).unwrap())
    });
}

fn bench_find_s(c: &mut Criterion) {
    let table = ExampleTable::from_rows(weather_rows(256)).unwrap();
    c.bench_function("find_s_256_rows", |b| {
        b.iter(|| find_s::learn(&table).unwrap())
    });
}

criterion_group!(benches, bench_candidate_elimination, bench_find_s);
criterion_main!(benches);
