use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixedheap::{BoundedHeap, HeapConfig, HeapFactory, Policy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N: usize = 100_000; // Number of streamed items

fn random_scores() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..N).map(|_| rng.gen()).collect()
}

fn bench_insert_stream(c: &mut Criterion) {
    let scores = random_scores();
    let mut group = c.benchmark_group("insert_stream");

    for policy in Policy::ALL {
        for limit in [16usize, 1024] {
            let config = HeapConfig::new(policy, limit).with_seed(0);
            group.bench_with_input(
                BenchmarkId::new(policy.name(), limit),
                &scores,
                |b, scores| {
                    b.iter(|| {
                        let mut heap: BoundedHeap<usize, u64, u64> =
                            HeapFactory::from_config(&config, None).unwrap();
                        for (key, score) in scores.iter().enumerate() {
                            heap.insert(key, black_box(*score)).unwrap();
                        }
                        black_box(heap.drain().count())
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_insert_stream);
criterion_main!(benches);
