// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ModuleLike;

/// Trait for types representing cell complexes over modules.
///
/// A cell complex is a collection of cells with a boundary operator mapping
/// each cell to a chain of cells one dimension lower. The boundary of a chain
/// is the linear extension of the cell boundary.
pub trait ComplexLike {
    /// The cell type of the complex.
    type Cell: Clone + Eq;
    /// Module type representing chains of cells.
    type Module: ModuleLike<Cell = Self::Cell>;
    /// Iterator type for traversing all cells in the complex.
    type CellIter<'a>: Iterator<Item = &'a Self::Cell>
    where
        Self: 'a;

    /// Return the boundary chain of a cell.
    fn cell_boundary(&self, cell: &Self::Cell) -> Self::Module;
    /// Returns an iterator over all cells in the complex, by increasing
    /// dimension.
    fn cell_iter(&self) -> Self::CellIter<'_>;
    /// Returns the dimension of the complex. This is the highest dimension
    /// constructed, which may exceed the dimension of any cell present.
    fn dimension(&self) -> usize;
    /// Returns the dimension of a specific cell.
    fn cell_dimension(&self, cell: &Self::Cell) -> usize;

    /// Return the boundary of `chain`.
    fn boundary(&self, chain: &Self::Module) -> Self::Module {
        let mut result = Self::Module::new();
        for (cell, coef) in chain.iter() {
            result += self.cell_boundary(cell).scalar_mul(coef.clone());
        }
        result
    }
}
