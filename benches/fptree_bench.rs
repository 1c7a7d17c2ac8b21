use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fpprobe::FPTree;
use rand::Rng;

/// Generate synthetic transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
///
/// Item draws are squared to skew the distribution towards low item
/// indices, giving the frequency spread an FP-tree exists to exploit.
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
) -> Vec<Vec<String>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let len = rng.gen_range(1..=avg_transaction_size * 2);
            (0..len)
                .map(|_| {
                    let draw: f64 = rng.gen();
                    let item = (draw * draw * num_items as f64) as usize;
                    format!("item{}", item.min(num_items - 1))
                })
                .collect()
        })
        .collect()
}

/// Benchmark tree construction with different dataset sizes
fn bench_build_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size);

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &transactions,
            |b, tx| {
                b.iter(|| FPTree::new(black_box(2), black_box(tx)));
            },
        );
    }

    group.finish();
}

/// Benchmark single probes against frequent and rare anchor items
fn bench_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe");

    let transactions = generate_transactions(2000, 50, 10);
    let tree = FPTree::new(2, &transactions);

    let frequent = vec!["item0".to_owned(), "item1".to_owned()];
    let rare = vec!["item0".to_owned(), "item47".to_owned()];

    group.bench_with_input(
        BenchmarkId::from_parameter("frequent_pair"),
        &frequent,
        |b, query| {
            b.iter(|| tree.probe_frequency(black_box(query)));
        },
    );
    group.bench_with_input(
        BenchmarkId::from_parameter("rare_pair"),
        &rare,
        |b, query| {
            b.iter(|| tree.probe_frequency(black_box(query)));
        },
    );

    group.finish();
}

/// Benchmark batched probing across the rayon pool
fn bench_probe_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe_batch");

    let transactions = generate_transactions(2000, 50, 10);
    let tree = FPTree::new(2, &transactions);

    let mut rng = rand::thread_rng();
    let queries: Vec<Vec<String>> = (0..256)
        .map(|_| {
            (0..2)
                .map(|_| format!("item{}", rng.gen_range(0..50)))
                .collect()
        })
        .collect();

    group.bench_with_input(
        BenchmarkId::from_parameter("256_pairs"),
        &queries,
        |b, qs| {
            b.iter(|| tree.probe_frequencies(black_box(qs)));
        },
    );

    group.finish();
}

criterion_group!(benches, bench_build_scaling, bench_probe, bench_probe_batch);
criterion_main!(benches);
