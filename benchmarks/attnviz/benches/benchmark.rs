//! Widget-core benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Softmax over growing logit vectors and temperatures
//! - Attention against growing key sets
//! - Eigen solvers (closed form vs nalgebra)
//! - PCA pipeline on generated point clouds
//! - Full widget snapshots (PCA walkthrough, covariance explorer)
//!
//! Run with: `cargo bench`

use attnviz::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate normally distributed logits.
fn generate_logits(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 2.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate keys scattered in the unit square.
fn generate_keys(size: usize, seed: u64) -> Vec<Key<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-1.0, 1.0).unwrap();
    (0..size)
        .map(|i| {
            Key::new(
                format!("k{i}"),
                Vector2::new(dist.sample(&mut rng), dist.sample(&mut rng)),
            )
        })
        .collect()
}

/// Generate a correlated point cloud with Gaussian noise.
fn generate_cloud(size: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let t_dist = Uniform::new(-3.0, 3.0).unwrap();
    let noise = Normal::new(0.0, 0.4).unwrap();
    (0..size)
        .map(|_| {
            let t: f64 = t_dist.sample(&mut rng);
            Vector2::new(t, 0.6 * t + noise.sample(&mut rng))
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_softmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax");
    group.sample_size(100);

    for size in [5, 100, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let logits = generate_logits(size, 42);
        let model = Softmax::new().temperature(1.0).build().unwrap();

        group.bench_with_input(BenchmarkId::new("apply", size), &size, |b, _| {
            b.iter(|| model.apply(black_box(&logits)).unwrap())
        });
    }

    let logits = generate_logits(100, 7);
    for temperature in [0.1, 1.0, 5.0] {
        let model = Softmax::new().temperature(temperature).build().unwrap();
        group.bench_with_input(
            BenchmarkId::new("temperature", temperature),
            &temperature,
            |b, _| b.iter(|| model.apply(black_box(&logits)).unwrap()),
        );
    }
    group.finish();
}

fn bench_attention(c: &mut Criterion) {
    let mut group = c.benchmark_group("attention");
    group.sample_size(100);

    for size in [3, 64, 1_024] {
        group.throughput(Throughput::Elements(size as u64));
        let keys = generate_keys(size, 42);

        for scaling in [AttentionScaling::None, AttentionScaling::SqrtDim] {
            let model = Attention::<f64>::new().scaling(scaling).build().unwrap();
            let name = format!("{scaling:?}");
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    model
                        .attend(black_box(Vector2::new(0.62, 0.62)), black_box(&keys))
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_eigen_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigen_solvers");
    group.sample_size(100);

    let cases = [
        ("diagonal", CovarianceMatrix::new(2.0f64, 1.0, 0.0)),
        ("correlated", CovarianceMatrix::new(1.0f64, 1.0, 0.8)),
        ("singular", CovarianceMatrix::new(1.0f64, 1.0, 1.0)),
    ];

    for (name, cov) in cases {
        for solver in [EigenSolver::ClosedForm, EigenSolver::Nalgebra] {
            let id = format!("{solver:?}");
            group.bench_with_input(BenchmarkId::new(id, name), &cov, |b, cov| {
                b.iter(|| solver.decompose(black_box(cov)))
            });
        }
    }
    group.finish();
}

fn bench_pca(c: &mut Criterion) {
    let mut group = c.benchmark_group("pca");
    group.sample_size(50);

    for size in [22, 1_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));
        let points = generate_cloud(size, 42);
        let model = Pca::new().build().unwrap();

        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| model.fit(black_box(&points)).unwrap())
        });
    }
    group.finish();
}

fn bench_widgets(c: &mut Criterion) {
    let mut group = c.benchmark_group("widgets");
    group.sample_size(100);

    group.bench_function("pca_snapshot", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let mut widget: PcaWidget<f64> = PcaWidget::new();
        widget.generate(PointCloudShape::Correlated, &mut rng);
        widget.analyze().unwrap();
        b.iter(|| black_box(&widget).snapshot())
    });

    group.bench_function("explorer_snapshot", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let mut explorer: CovarianceExplorer<f64> = CovarianceExplorer::new(&mut rng);
        explorer.set_covariance(0.7).unwrap();
        b.iter(|| black_box(&explorer).snapshot())
    });

    group.bench_function("softmax_snapshot", |b| {
        let widget: SoftmaxWidget<f64> = SoftmaxWidget::new();
        b.iter(|| black_box(&widget).snapshot())
    });

    group.bench_function("attention_drag", |b| {
        let mut widget: AttentionWidget<f64> = AttentionWidget::new();
        widget.pointer_down(Vector2::new(293.0, 107.0));
        let mut x = 293.0;
        b.iter(|| {
            x = if x > 340.0 { 250.0 } else { x + 1.0 };
            widget.pointer_move(black_box(Vector2::new(x, 107.0)));
            widget.snapshot()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_softmax,
    bench_attention,
    bench_eigen_solvers,
    bench_pca,
    bench_widgets,
);

criterion_main!(benches);
