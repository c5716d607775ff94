use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ripshom::{compute_homology, ComplexBuilder, DistanceIndex, PointCloud, SimplicialComplex};
use test_utilities::{random_cloud, ring, ring_loop_epsilon, square, triangle, two_clusters};

fn complex(points: &PointCloud, epsilon: f64) -> SimplicialComplex {
    let distances = DistanceIndex::new(points);
    ComplexBuilder::new(&distances, epsilon)
        .unwrap()
        .build(2)
        .unwrap()
}

fn reports(points: &PointCloud, epsilon: f64) -> Vec<String> {
    let complex = complex(points, epsilon);
    (0..=1)
        .map(|n| compute_homology(&complex, n).unwrap().to_string())
        .collect()
}

#[test]
fn triangle_fills_in() {
    assert_eq!(reports(&triangle(), 6.0), ["H_0 = ℤ^1", "H_1 = ℤ^0"]);
    assert_eq!(reports(&triangle(), 4.0), ["H_0 = ℤ^3", "H_1 = ℤ^0"]);
}

#[test]
fn square_loop_closes_past_the_diagonal() {
    assert_eq!(reports(&square(), 6.0), ["H_0 = ℤ^1", "H_1 = ℤ^1"]);
    assert_eq!(reports(&square(), 7.5), ["H_0 = ℤ^1", "H_1 = ℤ^0"]);
}

#[test]
fn ring_has_one_loop() {
    let points = ring(10, 40.0);
    let epsilon = ring_loop_epsilon(10, 40.0);
    assert_eq!(reports(&points, epsilon), ["H_0 = ℤ^1", "H_1 = ℤ^1"]);

    // Large enough to join every pair.
    assert_eq!(reports(&points, 50.0), ["H_0 = ℤ^1", "H_1 = ℤ^0"]);
}

#[test]
fn removing_a_ring_point_breaks_the_loop() {
    let mut points = ring(10, 40.0);
    let epsilon = ring_loop_epsilon(10, 40.0);
    points.remove(4).unwrap();
    assert_eq!(points.len(), 9);

    let rebuilt = complex(&points, epsilon);
    for (_, simplices) in rebuilt.skeleta() {
        assert!(simplices.iter().all(|simplex| simplex.last() < 9));
    }
    assert_eq!(reports(&points, epsilon), ["H_0 = ℤ^1", "H_1 = ℤ^0"]);
}

#[test]
fn separate_clusters_are_components() {
    assert_eq!(reports(&two_clusters(), 6.0), ["H_0 = ℤ^2", "H_1 = ℤ^0"]);
}

#[test]
fn empty_input_has_trivial_homology() {
    let complex = complex(&PointCloud::new(), 1.0);
    assert_eq!(complex.count(0), 0);
    for n in 0..=1 {
        assert!(compute_homology(&complex, n).unwrap().is_trivial());
    }
}

#[test]
fn homology_ignores_insertion_order() {
    let mut rng = StdRng::seed_from_u64(3);
    for seed in 0..5 {
        let points = random_cloud(seed, 9, 40.0);
        let mut shuffled = points.points().to_vec();
        shuffled.shuffle(&mut rng);
        let shuffled: PointCloud = shuffled.into_iter().collect();

        for epsilon in [6.0, 10.0] {
            assert_eq!(
                reports(&points, epsilon),
                reports(&shuffled, epsilon),
                "seed {seed}, epsilon {epsilon}"
            );
        }
    }
}
