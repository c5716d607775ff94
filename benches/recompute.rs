use ripshom::{compute_homology, ComplexBuilder, DistanceIndex, Session, SessionConfig};
use test_utilities::{random_cloud, ring, ring_loop_epsilon};

fn main() {
    divan::main();
}

#[divan::bench(args = [8, 16, 24, 32], sample_count = 10)]
fn ring_session_recompute(bencher: divan::Bencher, count: usize) {
    let config = SessionConfig::default().with_initial_epsilon(ring_loop_epsilon(count, 100.0));
    bencher
        .with_inputs(|| Session::with_points(config.clone(), ring(count, 100.0)).unwrap())
        .bench_local_values(|mut session| {
            let snapshot = session.recompute().unwrap();

            // Don't optimize away..
            assert_eq!(snapshot.group(1).unwrap().betti(), 1);
        });
}

#[divan::bench(args = [10, 15, 20], sample_count = 10)]
fn random_cloud_build(bencher: divan::Bencher, count: usize) {
    let distances = DistanceIndex::new(&random_cloud(count as u64, count, 100.0));
    bencher.bench_local(|| {
        ComplexBuilder::new(&distances, 15.0)
            .unwrap()
            .build(3)
            .unwrap()
    });
}

#[divan::bench(args = [10, 15, 20], sample_count = 10)]
fn random_cloud_homology(bencher: divan::Bencher, count: usize) {
    let distances = DistanceIndex::new(&random_cloud(count as u64, count, 100.0));
    let complex = ComplexBuilder::new(&distances, 15.0)
        .unwrap()
        .build(2)
        .unwrap();
    bencher.bench_local(|| compute_homology(&complex, 1).unwrap());
}
