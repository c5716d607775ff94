// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Homology groups from the ranks and elementary divisors of consecutive
//! boundary matrices.
//!
//! For dimension `n` with `m` simplices, `A = boundary(n)` and
//! `B = boundary(n + 1)`, the free rank is `m - rank(A) - rank(B)` and the
//! torsion summands are the non-unit elementary divisors of `A`.

use std::fmt::{Display, Error, Formatter};

use serde::Serialize;
use tracing::debug;

use crate::{
    boundary, BoundaryMatrix, EuclideanRing, HomologyError, Result, SimplicialComplex,
    SmithNormalForm,
};

/// A finitely generated homology group `R^k ⊕ R/a_1 ⊕ ... ⊕ R/a_t`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomologyGroup<R = i64> {
    dimension: usize,
    free_rank: usize,
    torsion: Vec<R>,
}

impl<R: EuclideanRing> HomologyGroup<R> {
    /// Create a group from its parts.
    #[must_use]
    pub fn new(dimension: usize, free_rank: usize, torsion: Vec<R>) -> Self {
        Self {
            dimension,
            free_rank,
            torsion,
        }
    }

    /// The homological dimension `n`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The rank `k` of the free part.
    pub fn free_rank(&self) -> usize {
        self.free_rank
    }

    /// The Betti number, i.e. the free rank.
    pub fn betti(&self) -> usize {
        self.free_rank
    }

    /// The torsion coefficients, each dividing the next.
    pub fn torsion(&self) -> &[R] {
        &self.torsion
    }

    /// Whether the group has no torsion.
    pub fn is_free(&self) -> bool {
        self.torsion.is_empty()
    }

    /// Whether the group is zero.
    pub fn is_trivial(&self) -> bool {
        self.free_rank == 0 && self.is_free()
    }
}

/// Renders `H_n = ℤ/a ⊕ ... ⊕ ℤ^k`; the free part is always shown.
impl<R: EuclideanRing + Display> Display for HomologyGroup<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        let symbol = R::math_symbol();
        write!(f, "H_{} = ", self.dimension)?;
        for coefficient in &self.torsion {
            write!(f, "{symbol}/{coefficient} ⊕ ")?;
        }
        write!(f, "{symbol}^{}", self.free_rank)
    }
}

/// Integer homology of `complex` in dimension `n`.
///
/// The complex must be built up to dimension `n + 1`; otherwise
/// [`HomologyError::InvalidDimension`] is returned.
pub fn compute_homology(complex: &SimplicialComplex, n: usize) -> Result<HomologyGroup<i64>> {
    compute_homology_with::<i64>(complex, n)
}

/// Homology of `complex` in dimension `n` with coefficients in `R`.
///
/// Over a field such as [`Cyclic`](crate::Cyclic) the torsion is always
/// empty and the free rank is the Betti number over that field.
pub fn compute_homology_with<R: EuclideanRing>(
    complex: &SimplicialComplex,
    n: usize,
) -> Result<HomologyGroup<R>> {
    if n + 1 > complex.dimension() {
        return Err(HomologyError::InvalidDimension {
            dimension: n,
            reason: format!(
                "needs the {}-simplices, but the complex is built up to dimension {}",
                n + 1,
                complex.dimension()
            ),
        });
    }
    let lower = boundary(complex, n)?;
    let upper = boundary(complex, n + 1)?;
    homology_from_boundaries(n, complex.count(n), &lower, &upper)
}

/// Homology in dimension `n` of a chain complex with `chain_rank` generators
/// in that dimension, outgoing boundary `lower` and incoming boundary
/// `upper`.
pub fn homology_from_boundaries<R: EuclideanRing>(
    n: usize,
    chain_rank: usize,
    lower: &BoundaryMatrix,
    upper: &BoundaryMatrix,
) -> Result<HomologyGroup<R>> {
    if lower.rows() != chain_rank || upper.columns() != chain_rank {
        return Err(HomologyError::InconsistentComplexState(format!(
            "boundary matrices of shape {}x{} and {}x{} do not meet at {chain_rank} \
             {n}-simplices",
            lower.rows(),
            lower.columns(),
            upper.rows(),
            upper.columns()
        )));
    }

    let lower = SmithNormalForm::<R>::from_boundary(lower)?;
    let upper = SmithNormalForm::<R>::from_boundary(upper)?;
    let (r, s) = (lower.rank(), upper.rank());
    let free_rank = chain_rank
        .checked_sub(r + s)
        .ok_or_else(|| {
            HomologyError::InconsistentComplexState(format!(
                "negative free rank in dimension {n}: {chain_rank} simplices, \
                 boundary ranks {r} and {s}"
            ))
        })?;

    debug!(
        dimension = n,
        simplices = chain_rank,
        lower_rank = r,
        upper_rank = s,
        free_rank,
        "computed homology"
    );
    Ok(HomologyGroup::new(n, free_rank, lower.torsion()))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{ComplexBuilder, Cyclic, DistanceIndex, PointCloud, Simplex};

    fn built(points: PointCloud, epsilon: f64, dimension: usize) -> SimplicialComplex {
        let distances = DistanceIndex::new(&points);
        ComplexBuilder::new(&distances, epsilon)
            .unwrap()
            .build(dimension)
            .unwrap()
    }

    #[test]
    fn filled_triangle_is_contractible() {
        let complex = built(PointCloud::from([(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]), 6.0, 2);
        let h0 = compute_homology(&complex, 0).unwrap();
        let h1 = compute_homology(&complex, 1).unwrap();

        assert_eq!(h0, HomologyGroup::new(0, 1, vec![]));
        assert!(h1.is_trivial());
        assert_eq!(h1.to_string(), "H_1 = ℤ^0");
    }

    #[test]
    fn square_cycle_has_one_loop() {
        let complex = built(
            PointCloud::from([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            6.0,
            2,
        );
        let h1 = compute_homology(&complex, 1).unwrap();
        assert_eq!(h1.betti(), 1);
        assert!(h1.is_free());
        assert_eq!(h1.to_string(), "H_1 = ℤ^1");
    }

    #[test]
    fn isolated_points_are_components() {
        let complex = built(PointCloud::from([(0.0, 0.0), (100.0, 0.0)]), 1.0, 1);
        assert_eq!(compute_homology(&complex, 0).unwrap().free_rank(), 2);
    }

    #[test]
    fn empty_complex_is_trivial() {
        let complex = built(PointCloud::new(), 1.0, 2);
        for n in 0..2 {
            let group = compute_homology(&complex, n).unwrap();
            assert!(group.is_trivial());
        }
    }

    #[test]
    fn unbuilt_dimension_is_rejected() {
        let complex = built(PointCloud::from([(0.0, 0.0), (1.0, 0.0)]), 1.0, 1);
        assert!(matches!(
            compute_homology(&complex, 1),
            Err(HomologyError::InvalidDimension { dimension: 1, .. })
        ));
    }

    #[test]
    fn hollow_triangle_has_one_loop() {
        let edges = crate::Combinations::new(3, 2)
            .map(|vertices| Simplex::try_from(vertices).unwrap())
            .collect();
        let complex = SimplicialComplex::from_skeleta(3, vec![edges, vec![]]).unwrap();

        assert_eq!(compute_homology(&complex, 0).unwrap().free_rank(), 1);
        assert_eq!(compute_homology(&complex, 1).unwrap(), HomologyGroup::new(1, 1, vec![]));
    }

    /// Six-vertex triangulation of the real projective plane.
    fn projective_plane() -> SimplicialComplex {
        let triangles: Vec<Simplex> = [
            [0, 1, 2],
            [0, 1, 5],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 5],
            [1, 2, 4],
            [1, 3, 4],
            [1, 3, 5],
            [2, 3, 5],
            [2, 4, 5],
        ]
        .into_iter()
        .map(|vertices| Simplex::try_from(vertices.to_vec()).unwrap())
        .collect();
        let edges = crate::Combinations::new(6, 2)
            .map(|vertices| Simplex::try_from(vertices).unwrap())
            .collect();
        SimplicialComplex::from_skeleta(6, vec![edges, triangles, vec![]]).unwrap()
    }

    #[test]
    fn projective_plane_torsion() {
        let complex = projective_plane();
        assert_eq!(complex.euler_characteristic(), 1);

        let h1 = compute_homology(&complex, 1).unwrap();
        assert!(h1.is_trivial());

        // The order-two divisor of the 2-boundary is reported with dimension 2.
        let h2 = compute_homology(&complex, 2).unwrap();
        assert_eq!(h2.free_rank(), 0);
        assert_eq!(h2.torsion(), &[2]);
        assert_eq!(h2.to_string(), "H_2 = ℤ/2 ⊕ ℤ^0");
    }

    #[test]
    fn projective_plane_mod_two() {
        let complex = projective_plane();
        let h1 = compute_homology_with::<Cyclic<2>>(&complex, 1).unwrap();
        let h2 = compute_homology_with::<Cyclic<2>>(&complex, 2).unwrap();
        assert_eq!(h1.betti(), 1);
        assert_eq!(h2.betti(), 1);
        assert!(h1.is_free() && h2.is_free());
        assert_eq!(h1.to_string(), "H_1 = 𝔽_2^1");

        let h1 = compute_homology_with::<Cyclic<3>>(&complex, 1).unwrap();
        assert!(h1.is_trivial());
    }

    #[test]
    fn synthetic_torsion() {
        // ℤ --2--> ℤ: the 1-chains have one generator hit twice.
        let lower = BoundaryMatrix::Incidence(array![[2]]);
        let upper = BoundaryMatrix::Degenerate { columns: 1 };
        let group = homology_from_boundaries::<i64>(1, 1, &lower, &upper).unwrap();
        assert_eq!(group, HomologyGroup::new(1, 0, vec![2]));
        assert_eq!(group.to_string(), "H_1 = ℤ/2 ⊕ ℤ^0");
    }

    #[test]
    fn inconsistent_ranks_are_reported() {
        let lower = BoundaryMatrix::Incidence(array![[1, 0], [0, 1]]);
        let upper = BoundaryMatrix::Incidence(array![[1, 0], [0, 1]]);
        assert!(matches!(
            homology_from_boundaries::<i64>(1, 2, &lower, &upper),
            Err(HomologyError::InconsistentComplexState(_))
        ));
        assert!(matches!(
            homology_from_boundaries::<i64>(1, 3, &lower, &upper),
            Err(HomologyError::InconsistentComplexState(_))
        ));
    }
}
