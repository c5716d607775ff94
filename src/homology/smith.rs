// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smith normal form over a Euclidean ring.
//!
//! Reduction works in place on a dense `ndarray` matrix using only swaps and
//! additions of ring multiples of one row (column) to another, so the result
//! is the Smith normal form of the input up to units. Diagonal position `t` is
//! finished when its row and column are clear and its entry divides every
//! entry of the remaining submatrix, which yields `d_1 | d_2 | ... | d_r`.

use ndarray::Array2;
use tracing::trace;

use crate::{BoundaryMatrix, EuclideanRing, HomologyError, Result, RingLike};

/// The nonzero diagonal of a Smith normal form, with the source shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmithNormalForm<R> {
    rows: usize,
    columns: usize,
    diagonal: Vec<R>,
}

impl<R: EuclideanRing> SmithNormalForm<R> {
    /// Reduce `matrix`.
    ///
    /// Returns [`HomologyError::ArithmeticOverflow`] if an intermediate entry
    /// cannot be represented in `R`.
    pub fn compute(mut matrix: Array2<R>) -> Result<Self> {
        let (rows, columns) = matrix.dim();
        let mut diagonal = Vec::new();
        if matrix.iter().all(RingLike::is_zero) {
            return Ok(Self {
                rows,
                columns,
                diagonal,
            });
        }

        for t in 0..rows.min(columns) {
            let Some((row, column)) = smallest_entry(&matrix, t) else {
                break;
            };
            swap_rows(&mut matrix, t, row);
            swap_columns(&mut matrix, t, column);
            reduce_position(&mut matrix, t)?;

            let unit = matrix[[t, t]].canonical_unit();
            let pivot = R::zero()
                .sub_multiple(&-unit, &matrix[[t, t]])
                .ok_or(HomologyError::ArithmeticOverflow { pivot: t })?;
            trace!(position = t, pivot = ?pivot, "fixed elementary divisor");
            matrix[[t, t]] = pivot.clone();
            diagonal.push(pivot);
        }

        Ok(Self {
            rows,
            columns,
            diagonal,
        })
    }

    /// Reduce an integer boundary matrix after mapping its entries into `R`.
    pub fn from_boundary(matrix: &BoundaryMatrix) -> Result<Self> {
        match matrix {
            BoundaryMatrix::Incidence(entries) => {
                Self::compute(entries.mapv(R::from_integer))
            }
            BoundaryMatrix::Degenerate { columns } => Ok(Self {
                rows: 0,
                columns: *columns,
                diagonal: Vec::new(),
            }),
        }
    }

    /// Number of nonzero diagonal entries.
    pub fn rank(&self) -> usize {
        self.diagonal.len()
    }

    /// The nonzero diagonal entries in order; each divides the next.
    pub fn elementary_divisors(&self) -> &[R] {
        &self.diagonal
    }

    /// The elementary divisors that are not units.
    pub fn torsion(&self) -> Vec<R> {
        self.diagonal
            .iter()
            .filter(|divisor| !divisor.is_invertible())
            .cloned()
            .collect()
    }

    /// Whether the reduced matrix was the zero matrix.
    pub fn is_zero(&self) -> bool {
        self.diagonal.is_empty()
    }

    /// Shape of the reduced matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }
}

/// Clear row and column `t` and make `matrix[[t, t]]` divide the trailing
/// submatrix. The pivot must be nonzero on entry.
fn reduce_position<R: EuclideanRing>(matrix: &mut Array2<R>, t: usize) -> Result<()> {
    let (rows, columns) = matrix.dim();
    let overflow = || HomologyError::ArithmeticOverflow { pivot: t };

    loop {
        let mut clear = true;
        for i in t + 1..rows {
            if matrix[[i, t]].is_zero() {
                continue;
            }
            let (quotient, remainder) =
                matrix[[i, t]].div_rem(&matrix[[t, t]]).ok_or_else(overflow)?;
            subtract_row_multiple(matrix, i, t, &quotient, t).ok_or_else(overflow)?;
            clear &= remainder.is_zero();
        }
        for j in t + 1..columns {
            if matrix[[t, j]].is_zero() {
                continue;
            }
            let (quotient, remainder) =
                matrix[[t, j]].div_rem(&matrix[[t, t]]).ok_or_else(overflow)?;
            subtract_column_multiple(matrix, j, t, &quotient, t).ok_or_else(overflow)?;
            clear &= remainder.is_zero();
        }

        if !clear {
            // A nonzero remainder is smaller than the pivot; move the smallest
            // one to the diagonal and eliminate again.
            let (row, column) = smallest_in_cross(matrix, t);
            swap_rows(matrix, t, row);
            swap_columns(matrix, t, column);
            continue;
        }

        // An unrepresentable quotient only arises for a unit pivot, which
        // divides everything.
        let pivot = &matrix[[t, t]];
        let offending = (t + 1..rows).find(|&i| {
            (t + 1..columns).any(|j| {
                matrix[[i, j]]
                    .div_rem(pivot)
                    .is_some_and(|(_, remainder)| !remainder.is_zero())
            })
        });
        match offending {
            Some(i) => {
                let minus_one = -R::one();
                subtract_row_multiple(matrix, t, i, &minus_one, t).ok_or_else(overflow)?;
            }
            None => return Ok(()),
        }
    }
}

/// Position of a nonzero entry of least Euclidean size in the submatrix
/// starting at (`t`, `t`).
fn smallest_entry<R: EuclideanRing>(matrix: &Array2<R>, t: usize) -> Option<(usize, usize)> {
    let (rows, columns) = matrix.dim();
    (t..rows)
        .flat_map(|i| (t..columns).map(move |j| (i, j)))
        .filter(|&(i, j)| !matrix[[i, j]].is_zero())
        .min_by_key(|&(i, j)| matrix[[i, j]].euclidean_size())
}

/// Position of a nonzero entry of least Euclidean size in row `t` or column
/// `t`, to the right of or below the diagonal.
fn smallest_in_cross<R: EuclideanRing>(matrix: &Array2<R>, t: usize) -> (usize, usize) {
    let (rows, columns) = matrix.dim();
    (t..rows)
        .map(|i| (i, t))
        .chain((t + 1..columns).map(|j| (t, j)))
        .filter(|&(i, j)| !matrix[[i, j]].is_zero())
        .min_by_key(|&(i, j)| matrix[[i, j]].euclidean_size())
        .unwrap_or((t, t))
}

fn swap_rows<R>(matrix: &mut Array2<R>, a: usize, b: usize) {
    if a != b {
        for j in 0..matrix.ncols() {
            matrix.swap([a, j], [b, j]);
        }
    }
}

fn swap_columns<R>(matrix: &mut Array2<R>, a: usize, b: usize) {
    if a != b {
        for i in 0..matrix.nrows() {
            matrix.swap([i, a], [i, b]);
        }
    }
}

/// `row[target] -= factor * row[source]`, over columns `from..`.
fn subtract_row_multiple<R: EuclideanRing>(
    matrix: &mut Array2<R>,
    target: usize,
    source: usize,
    factor: &R,
    from: usize,
) -> Option<()> {
    for j in from..matrix.ncols() {
        let value = matrix[[target, j]].sub_multiple(factor, &matrix[[source, j]])?;
        matrix[[target, j]] = value;
    }
    Some(())
}

/// `column[target] -= factor * column[source]`, over rows `from..`.
fn subtract_column_multiple<R: EuclideanRing>(
    matrix: &mut Array2<R>,
    target: usize,
    source: usize,
    factor: &R,
    from: usize,
) -> Option<()> {
    for i in from..matrix.nrows() {
        let value = matrix[[i, target]].sub_multiple(factor, &matrix[[i, source]])?;
        matrix[[i, target]] = value;
    }
    Some(())
}
