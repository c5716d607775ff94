// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Helper trait for types that support additive operations.
pub trait Additive:
    Sized + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
}

/// Helper trait for types that support multiplicative operations.
pub trait Multiplicative: Sized + Mul<Output = Self> + MulAssign {}

/// Helper trait for basic algebraic structure requirements.
pub trait AlgebraicBase: Sized + Clone + Eq + Debug {}

impl<T> Additive for T where
    T: Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
}

impl<T> Multiplicative for T where T: Mul<Output = Self> + MulAssign {}

impl<T> AlgebraicBase for T where T: Sized + Clone + Eq + Debug {}

/// Expected functionality for coefficient rings throughout `ripshom`. These
/// coefficient rings are expected to be commutative integral domains with
/// unity, though this is not checked by this trait.
pub trait RingLike: AlgebraicBase + Additive + Multiplicative {
    /// Creates a new ring element representing the additive identity.
    fn zero() -> Self;
    /// Creates a new ring element representing the multiplicative identity.
    fn one() -> Self;
    /// Check if the element is invertible in the ring.
    fn is_invertible(&self) -> bool;
    /// Return the multiplicative inverse of `self`. Panics if `self` is not a
    /// unit.
    fn invert(&self) -> Self;

    /// Check if the element is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// A ring with a Euclidean division, which is what Smith reduction needs to
/// drive every pivot down to the gcd of its row and column.
///
/// Arithmetic used during reduction goes through [`EuclideanRing::sub_multiple`]
/// so that implementations over machine integers can report overflow instead
/// of wrapping.
pub trait EuclideanRing: RingLike {
    /// Return `(q, r)` with `self = q * divisor + r` and `r` of strictly
    /// smaller [`EuclideanRing::euclidean_size`] than `divisor`, or `None` if
    /// the quotient is not representable. Panics if `divisor` is zero.
    fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)>;

    /// The Euclidean function; zero only for the zero element.
    fn euclidean_size(&self) -> u64;

    /// A unit `u` such that `self * u` is the canonical associate of `self`
    /// (nonnegative for the integers, one for nonzero field elements).
    fn canonical_unit(&self) -> Self;

    /// Compute `self - factor * other`, or `None` if the result is not
    /// representable.
    fn sub_multiple(&self, factor: &Self, other: &Self) -> Option<Self>;

    /// Image of an integer incidence coefficient in the ring.
    fn from_integer(value: i64) -> Self;

    /// Symbol used when rendering free summands, e.g. `ℤ`.
    fn math_symbol() -> String;
}

/// The expected functionality for types implementing algebraic modules over the
/// coefficient ring `Self::Ring`. Objects of a type satisfying `ModuleLike` represent
/// linear combinations of objects of the basis type `Self::Cell`.
pub trait ModuleLike:
    AlgebraicBase
    + Additive
    + FromIterator<(Self::Cell, Self::Ring)>
    + IntoIterator<Item = (Self::Cell, Self::Ring)>
{
    /// The type of the basis elements of the module.
    type Cell;
    /// Coefficient type applied to cells in the module.
    type Ring: RingLike;
    /// Iterator type for iterating over (cell, coefficient) pairs.
    type Iter<'a>: Iterator<Item = (&'a Self::Cell, &'a Self::Ring)>
    where
        Self: 'a;

    /// Create an empty module element.
    fn new() -> Self;
    /// Return the coefficient of `cell` in `self`; zero if absent.
    fn coef(&self, cell: &Self::Cell) -> Self::Ring;
    /// Perform scalar multiplication of `self` with `coef`.
    fn scalar_mul(self, coef: Self::Ring) -> Self;
    /// Returns an iterator over all (cell, coefficient) pairs with nonzero
    /// coefficient.
    fn iter(&self) -> Self::Iter<'_>;
    /// Add `coef` to the coefficient of `cell`, dropping the entry if the sum
    /// vanishes.
    fn insert_or_add(&mut self, cell: Self::Cell, coef: Self::Ring);

    /// Number of cells with nonzero coefficient.
    fn support_size(&self) -> usize {
        self.iter().count()
    }
}
