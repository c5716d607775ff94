// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{BTreeMap, btree_map};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{ModuleLike, RingLike, Simplex};

/// Sparse simplicial chains: formal sums of simplices with coefficients in
/// `R`.
///
/// Entries with zero coefficient are never stored, so equality and
/// [`ModuleLike::support_size`] reflect only the nonzero part. Storage is a
/// `BTreeMap`, which keeps iteration in lexicographic simplex order and makes
/// printed chains reproducible.
///
/// # Examples
///
/// ```rust
/// use ripshom::{Chain, ModuleLike, Simplex};
///
/// let edge = Simplex::try_from(vec![0, 1]).unwrap();
/// let mut chain = Chain::<i64>::new();
/// chain.insert_or_add(edge.clone(), 2);
/// chain.insert_or_add(edge.clone(), -2);
///
/// assert_eq!(chain, Chain::new());
/// assert_eq!(chain.coef(&edge), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain<R> {
    terms: BTreeMap<Simplex, R>,
}

impl<R: RingLike> ModuleLike for Chain<R> {
    type Cell = Simplex;
    type Iter<'a>
        = btree_map::Iter<'a, Simplex, R>
    where
        Self: 'a;
    type Ring = R;

    fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    fn coef(&self, cell: &Simplex) -> R {
        self.terms.get(cell).cloned().unwrap_or_else(R::zero)
    }

    fn scalar_mul(mut self, coef: R) -> Self {
        if coef.is_zero() {
            self.terms.clear();
        } else if coef != R::one() {
            for cell_coef in self.terms.values_mut() {
                *cell_coef *= coef.clone();
            }
            self.terms.retain(|_, cell_coef| !cell_coef.is_zero());
        }
        self
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.terms.iter()
    }

    fn insert_or_add(&mut self, cell: Simplex, coef: R) {
        if coef.is_zero() {
            return;
        }
        match self.terms.entry(cell) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(coef);
            }
            btree_map::Entry::Occupied(mut entry) => {
                *entry.get_mut() += coef;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
        }
    }
}

impl<R> Display for Chain<R>
where
    R: RingLike + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let mut first = true;
        for (cell, coef) in &self.terms {
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if *coef == R::one() {
                write!(f, "{cell}")?;
            } else {
                write!(f, "{coef}*{cell}")?;
            }
        }
        Ok(())
    }
}

impl<R: RingLike> Neg for Chain<R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for coef in self.terms.values_mut() {
            *coef = -coef.clone();
        }
        self
    }
}

impl<R: RingLike> AddAssign for Chain<R> {
    fn add_assign(&mut self, rhs: Self) {
        for (cell, coef) in rhs.terms {
            self.insert_or_add(cell, coef);
        }
    }
}

impl<R: RingLike> Add for Chain<R> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<R: RingLike> SubAssign for Chain<R> {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl<R: RingLike> Sub for Chain<R> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<R: RingLike> FromIterator<(Simplex, R)> for Chain<R> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Simplex, R)>,
    {
        let mut chain = Self::new();
        for (cell, coef) in iter {
            chain.insert_or_add(cell, coef);
        }
        chain
    }
}

impl<R> IntoIterator for Chain<R> {
    type IntoIter = btree_map::IntoIter<Simplex, R>;
    type Item = (Simplex, R);

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<R: RingLike, const N: usize> From<[(Simplex, R); N]> for Chain<R> {
    fn from(items: [(Simplex, R); N]) -> Self {
        items.into_iter().collect()
    }
}
