use ripshom::{
    boundary, compute_homology, compute_homology_with, ComplexBuilder, Cyclic, DistanceIndex,
    SimplicialComplex, SmithNormalForm,
};
use test_utilities::{random_cloud, ring, ring_loop_epsilon};

fn build(distances: &DistanceIndex, epsilon: f64, dimension: usize) -> SimplicialComplex {
    ComplexBuilder::new(distances, epsilon)
        .unwrap()
        .build(dimension)
        .unwrap()
}

fn assert_boundaries_compose_to_zero(complex: &SimplicialComplex) {
    for n in 1..complex.dimension() {
        let lower = boundary(complex, n).unwrap();
        let upper = boundary(complex, n + 1).unwrap();
        let product = upper.compose(&lower).unwrap();
        assert!(
            product.iter().all(|entry| *entry == 0),
            "boundary {} after boundary {n} is nonzero",
            n + 1
        );
    }
}

#[test]
fn random_clouds_form_chain_complexes() {
    for seed in 0..8 {
        let distances = DistanceIndex::new(&random_cloud(seed, 10, 50.0));
        for epsilon in [5.0, 10.0, 15.0] {
            let complex = build(&distances, epsilon, 3);
            assert!(complex.is_facet_closed(), "seed {seed}, epsilon {epsilon}");
            assert_boundaries_compose_to_zero(&complex);
        }
    }
}

#[test]
fn integer_and_large_prime_betti_numbers_agree() {
    for seed in 0..6 {
        let distances = DistanceIndex::new(&random_cloud(seed, 9, 40.0));
        let complex = build(&distances, 9.0, 3);
        for n in 0..=2 {
            let integral = compute_homology(&complex, n).unwrap();
            let modular = compute_homology_with::<Cyclic<1_000_000_007>>(&complex, n).unwrap();
            assert_eq!(integral.free_rank(), modular.free_rank(), "seed {seed}, H_{n}");
        }
    }
}

#[test]
fn alternating_betti_sum_is_euler_characteristic() {
    // The ring has no 2-simplices at this threshold, so building one level
    // higher captures the whole complex.
    let points = ring(12, 30.0);
    let distances = DistanceIndex::new(&points);
    let complex = build(&distances, ring_loop_epsilon(12, 30.0), 3);
    assert_eq!(complex.count(2), 0);

    let betti_sum: i64 = (0..=2)
        .map(|n| {
            let betti = compute_homology(&complex, n).unwrap().betti() as i64;
            if n % 2 == 0 { betti } else { -betti }
        })
        .sum();
    assert_eq!(betti_sum, complex.euler_characteristic());
    assert_eq!(betti_sum, 0);
}

#[test]
fn boundary_shapes_follow_simplex_counts() {
    let distances = DistanceIndex::new(&random_cloud(42, 8, 30.0));
    let complex = build(&distances, 8.0, 3);
    for n in 1..=3 {
        let matrix = boundary(&complex, n).unwrap();
        assert_eq!(matrix.rows(), complex.count(n));
        assert_eq!(matrix.columns(), complex.count(n - 1));
    }
}

#[test]
fn boundary_divisors_form_a_divisibility_chain() {
    for seed in 0..4 {
        let distances = DistanceIndex::new(&random_cloud(seed, 10, 40.0));
        let complex = build(&distances, 10.0, 3);
        for n in 1..=3 {
            let snf = SmithNormalForm::<i64>::from_boundary(&boundary(&complex, n).unwrap())
                .unwrap();
            for pair in snf.elementary_divisors().windows(2) {
                assert!(pair[0] > 0);
                assert_eq!(pair[1] % pair[0], 0, "seed {seed}, dimension {n}");
            }
        }
    }
}
