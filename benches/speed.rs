use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use nonuniform_cubic_splines::CubicSpline;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn generate_random_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n).map(|_| rng.random_range(-10.0..10.0)).collect()
}

fn generate_random_monotonic_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut current = 0.0;
    (0..n)
        .map(|_| {
            current += rng.random_range(0.1..1.0);
            current
        })
        .collect()
}

fn benchmark_spline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cubic Spline");

    // Fixed seed for deterministic results
    const SEED: u64 = 12345;
    const QUERIES: usize = 10000;

    for num_points in [10, 50, 100, 500] {
        let x = generate_random_monotonic_values(num_points, SEED);
        let y = generate_random_values(num_points, SEED + 10000);

        group.bench_function(BenchmarkId::new("natural", num_points), |b| {
            b.iter(|| black_box(CubicSpline::natural(&x, &y)))
        });

        group.bench_function(BenchmarkId::new("clamped", num_points), |b| {
            b.iter(|| black_box(CubicSpline::clamped(&x, &y, 0.0, 1.0)))
        });

        let spline = CubicSpline::natural(&x, &y).unwrap();
        let x_max = x[num_points - 1];
        let mut rng = StdRng::seed_from_u64(SEED + 20000);
        let mut queries: Vec<f64> = (0..QUERIES)
            .map(|_| rng.random_range(-1.0..x_max + 1.0))
            .collect();

        queries.sort_by(f64::total_cmp);
        group.bench_function(
            BenchmarkId::new("evaluate_sorted", num_points),
            |b| b.iter(|| black_box(spline.evaluate(&queries))),
        );

        // Shuffled queries mostly miss the cursor and fall back to the scan.
        queries.shuffle(&mut rng);
        group.bench_function(
            BenchmarkId::new("evaluate_shuffled", num_points),
            |b| b.iter(|| black_box(spline.evaluate(&queries))),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_spline);
criterion_main!(benches);
