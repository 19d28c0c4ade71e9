use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use densemat::{random_matrix, random_vec, Matrix};
use qrupdate::{HouseholderQr, QrUpdate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn factored(m: usize, n: usize, seed: u64) -> (Matrix<f64>, Matrix<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let a: Matrix<f64> = random_matrix(m, n, &mut rng);
    let mut decomp = HouseholderQr::new();
    decomp.decompose(&a).unwrap();
    (decomp.q(), decomp.r(), random_vec(n, &mut rng))
}

fn bench_add_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_row_vs_refactorize");

    for &m in &[10, 50, 100, 200] {
        let n = m / 2;

        group.bench_with_input(BenchmarkId::new("incremental", m), &m, |b, &m| {
            b.iter_batched(
                || {
                    let (q, r, row) = factored(m, n, 42);
                    (q, r, row, QrUpdate::with_capacity(m))
                },
                |(mut q, mut r, row, mut update)| {
                    update.add_row(&mut q, &mut r, &row, m / 2, true).unwrap();
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("refactorize", m), &m, |b, &m| {
            b.iter_batched(
                || {
                    let mut rng = ChaCha8Rng::seed_from_u64(42);
                    let a: Matrix<f64> = random_matrix(m + 1, n, &mut rng);
                    (a, HouseholderQr::new())
                },
                |(a, mut decomp)| {
                    decomp.decompose(&a).unwrap();
                    let _ = decomp.q();
                    let _ = decomp.r();
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_delete_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_row");

    for &m in &[10, 50, 100, 200] {
        let n = m / 2;

        group.bench_with_input(BenchmarkId::new("incremental", m), &m, |b, &m| {
            b.iter_batched(
                || {
                    let (q, r, _) = factored(m, n, 7);
                    (q, r, QrUpdate::with_capacity(m))
                },
                |(mut q, mut r, mut update)| {
                    update.delete_row(&mut q, &mut r, m / 2, true).unwrap();
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_row, bench_delete_row);
criterion_main!(benches);
