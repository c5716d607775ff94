// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer boundary matrices of a [`SimplicialComplex`].
//!
//! The boundary matrix in dimension `n` has one row per `n`-simplex and one
//! column per `(n-1)`-simplex (per point when `n = 1`), both in the order the
//! complex stores them. Entries follow the sign convention of
//! [`SimplicialComplex::cell_boundary`]:
//! - `n = 1`: the row of `[p, q]` has `+1` in column `p` and `-1` in column
//!   `q`;
//! - `n >= 2`: the facet obtained by deleting position `f` gets `(-1)^f`.
//!
//! Both conventions square to zero when composed, which is all the rank and
//! elementary divisor computations need.

use std::collections::HashMap;

use ndarray::Array2;
use tracing::debug;

use crate::{ComplexLike, HomologyError, ModuleLike, Result, Simplex, SimplicialComplex};

/// A boundary matrix, or the explicit stand-in for a dimension with no
/// simplices.
///
/// A dimension without simplices has no rows at all. Rather than carry a
/// `0 x k` array through the reduction, it is tagged as
/// [`BoundaryMatrix::Degenerate`], which is the zero map and reduces to rank
/// zero without entering elimination. [`BoundaryMatrix::to_dense`] renders it
/// as a single zero row of width `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryMatrix {
    /// Signed incidences, rows indexed by `n`-simplices and columns by
    /// `(n-1)`-simplices.
    Incidence(Array2<i64>),
    /// No `n`-simplices exist; `columns` is the number of `(n-1)`-simplices.
    Degenerate {
        /// Number of `(n-1)`-simplices (points, when `n = 1`).
        columns: usize,
    },
}

impl BoundaryMatrix {
    /// Number of `n`-simplices indexing the rows; zero when degenerate.
    pub fn rows(&self) -> usize {
        match self {
            Self::Incidence(matrix) => matrix.nrows(),
            Self::Degenerate { .. } => 0,
        }
    }

    /// Number of `(n-1)`-simplices indexing the columns.
    pub fn columns(&self) -> usize {
        match self {
            Self::Incidence(matrix) => matrix.ncols(),
            Self::Degenerate { columns } => *columns,
        }
    }

    /// Whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Incidence(matrix) => matrix.iter().all(|entry| *entry == 0),
            Self::Degenerate { .. } => true,
        }
    }

    /// Entry at (`row`, `column`). Panics if out of range.
    pub fn entry(&self, row: usize, column: usize) -> i64 {
        match self {
            Self::Incidence(matrix) => matrix[[row, column]],
            Self::Degenerate { columns } => {
                assert!(
                    row == 0 && column < *columns,
                    "entry ({row}, {column}) outside degenerate boundary matrix"
                );
                0
            }
        }
    }

    /// Dense form; the degenerate matrix becomes a single zero row.
    pub fn to_dense(&self) -> Array2<i64> {
        match self {
            Self::Incidence(matrix) => matrix.clone(),
            Self::Degenerate { columns } => Array2::zeros((1, *columns)),
        }
    }

    /// The product `self * lower`, where `self` is the boundary matrix one
    /// dimension above `lower`. For a chain complex this is the zero matrix.
    pub fn compose(&self, lower: &BoundaryMatrix) -> Result<Array2<i64>> {
        if self.columns() != lower.rows() {
            return Err(HomologyError::InconsistentComplexState(format!(
                "cannot compose a {}x{} boundary matrix with a {}x{} one",
                self.rows(),
                self.columns(),
                lower.rows(),
                lower.columns()
            )));
        }
        Ok(match (self, lower) {
            (Self::Incidence(upper), Self::Incidence(lower)) => upper.dot(lower),
            _ => Array2::zeros((self.rows(), lower.columns())),
        })
    }
}

/// Assemble the `n`-th boundary matrix of `complex`.
///
/// `n = 0` is the zero map out of the vertices. Returns
/// [`HomologyError::InvalidDimension`] when `n` exceeds the constructed
/// dimension, and [`HomologyError::InconsistentComplexState`] when a facet of
/// a recorded simplex is missing from the complex.
pub fn boundary(complex: &SimplicialComplex, n: usize) -> Result<BoundaryMatrix> {
    if n > complex.dimension() {
        return Err(HomologyError::InvalidDimension {
            dimension: n,
            reason: format!("complex is only built up to dimension {}", complex.dimension()),
        });
    }

    let simplices = complex.simplices(n);
    let columns = if n == 0 { 0 } else { complex.count(n - 1) };
    if simplices.is_empty() {
        debug!(dimension = n, columns, "degenerate boundary matrix");
        return Ok(BoundaryMatrix::Degenerate { columns });
    }

    let mut matrix = Array2::<i64>::zeros((simplices.len(), columns));
    if n > 0 {
        let column_of: HashMap<&Simplex, usize> = complex
            .simplices(n - 1)
            .iter()
            .enumerate()
            .map(|(column, facet)| (facet, column))
            .collect();

        for (row, simplex) in simplices.iter().enumerate() {
            for (facet, coef) in complex.cell_boundary(simplex).iter() {
                let column = column_of.get(facet).ok_or_else(|| {
                    HomologyError::InconsistentComplexState(format!(
                        "facet {facet} of {simplex} is not a recorded {}-simplex",
                        n - 1
                    ))
                })?;
                matrix[[row, *column]] = *coef;
            }
        }
    }

    debug!(
        dimension = n,
        rows = matrix.nrows(),
        columns = matrix.ncols(),
        "assembled boundary matrix"
    );
    Ok(BoundaryMatrix::Incidence(matrix))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn simplex(vertices: &[u32]) -> Simplex {
        Simplex::try_from(vertices.to_vec()).unwrap()
    }

    fn filled_triangle() -> SimplicialComplex {
        SimplicialComplex::from_skeleta(
            3,
            vec![
                vec![simplex(&[0, 1]), simplex(&[0, 2]), simplex(&[1, 2])],
                vec![simplex(&[0, 1, 2])],
            ],
        )
        .unwrap()
    }

    #[test]
    fn edge_rows_put_plus_on_first_vertex() {
        let matrix = boundary(&filled_triangle(), 1).unwrap();
        assert_eq!(
            matrix,
            BoundaryMatrix::Incidence(array![[1, -1, 0], [1, 0, -1], [0, 1, -1]])
        );
    }

    #[test]
    fn triangle_rows_alternate_by_deleted_position() {
        // Deleting position 0, 1, 2 of [0, 1, 2] gives [1, 2], [0, 2], [0, 1].
        let matrix = boundary(&filled_triangle(), 2).unwrap();
        assert_eq!(matrix, BoundaryMatrix::Incidence(array![[1, -1, 1]]));
    }

    #[test]
    fn consecutive_boundaries_compose_to_zero() {
        let complex = filled_triangle();
        let upper = boundary(&complex, 2).unwrap();
        let lower = boundary(&complex, 1).unwrap();
        let product = upper.compose(&lower).unwrap();
        assert_eq!(product.dim(), (1, 3));
        assert!(product.iter().all(|entry| *entry == 0));
    }

    #[test]
    fn empty_dimension_is_degenerate() {
        let complex =
            SimplicialComplex::from_skeleta(3, vec![vec![simplex(&[0, 1])], vec![]]).unwrap();
        let matrix = boundary(&complex, 2).unwrap();

        assert_eq!(matrix, BoundaryMatrix::Degenerate { columns: 1 });
        assert_eq!(matrix.rows(), 0);
        assert!(matrix.is_zero());
        assert_eq!(matrix.to_dense(), array![[0]]);
        assert_eq!(matrix.entry(0, 0), 0);
    }

    #[test]
    fn vertices_map_to_zero() {
        let matrix = boundary(&SimplicialComplex::vertices(4), 0).unwrap();
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.columns(), 0);
        assert!(matrix.is_zero());

        let empty = boundary(&SimplicialComplex::vertices(0), 0).unwrap();
        assert_eq!(empty, BoundaryMatrix::Degenerate { columns: 0 });
    }

    #[test]
    fn shape_follows_simplex_counts() {
        let complex = SimplicialComplex::from_skeleta(
            4,
            vec![vec![simplex(&[0, 1]), simplex(&[1, 2]), simplex(&[2, 3])], vec![]],
        )
        .unwrap();
        let matrix = boundary(&complex, 1).unwrap();
        assert_eq!((matrix.rows(), matrix.columns()), (3, 4));
        assert_eq!(matrix.to_dense().dim(), (complex.count(1), complex.count(0)));
    }

    #[test]
    fn dimension_beyond_complex_is_rejected() {
        assert!(matches!(
            boundary(&filled_triangle(), 3),
            Err(HomologyError::InvalidDimension { dimension: 3, .. })
        ));
    }

    #[test]
    fn mismatched_composition_is_reported() {
        let complex = filled_triangle();
        let upper = boundary(&complex, 2).unwrap();
        assert!(matches!(
            upper.compose(&upper),
            Err(HomologyError::InconsistentComplexState(_))
        ));
    }
}
