// Recommendation throughput over synthetic catalogs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sillage_core::{Engine, Gender, NoteIndex, Perfume};

const GENDERS: [Gender; 3] = [Gender::Women, Gender::Men, Gender::Unisex];

fn generate_catalog(size: usize, vocabulary: usize, rng: &mut StdRng) -> Vec<Perfume> {
    let note = |rng: &mut StdRng| format!("note-{}", rng.random_range(0..vocabulary));
    (0..size)
        .map(|i| {
            let top: Vec<String> = (0..rng.random_range(1..6)).map(|_| note(rng)).collect();
            let mid: Vec<String> = (0..rng.random_range(0..6)).map(|_| note(rng)).collect();
            let base: Vec<String> = (0..rng.random_range(0..5)).map(|_| note(rng)).collect();
            Perfume::new(format!("perfume {}", i), format!("Brand {}", i % 50))
                .with_gender(Some(GENDERS[i % 3]))
                .with_rating(rng.random_range(2.5..5.0), rng.random_range(100..20_000))
                .with_notes(top.as_slice(), mid.as_slice(), base.as_slice())
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [1_000, 10_000].iter() {
        let catalog = generate_catalog(*size, 800, &mut rng);
        group.bench_with_input(BenchmarkId::new("note_index", size), &catalog, |b, catalog| {
            b.iter(|| NoteIndex::build(black_box(catalog.clone())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [1_000, 10_000, 25_000].iter() {
        let engine = Engine::from_perfumes(generate_catalog(*size, 800, &mut rng));
        engine.warm_up().unwrap();
        let query = ["note-1", "note-17", "note-256", "note-511"];
        let brands: Vec<String> = (0..5).map(|i| format!("Brand {}", i)).collect();

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &engine, |b, engine| {
            b.iter(|| engine.recommend(black_box(&query), None, None, 8).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("filtered", size), &engine, |b, engine| {
            b.iter(|| {
                engine
                    .recommend(black_box(&query), Some("unisex"), Some(&brands), 8)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
