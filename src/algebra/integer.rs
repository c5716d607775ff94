// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The integers `ℤ`, represented by `i64`, as the coefficient ring of the
//! boundary matrices.

use crate::algebra::traits::{EuclideanRing, RingLike};

impl RingLike for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_invertible(&self) -> bool {
        *self == 1 || *self == -1
    }

    fn invert(&self) -> Self {
        assert!(
            self.is_invertible(),
            "attempting to invert non-unit integer {self}"
        );
        *self
    }
}

impl EuclideanRing for i64 {
    /// Truncating division with a remainder of smaller magnitude
    /// than the divisor; the sign of the remainder follows `self`.
    fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        assert!(*divisor != 0, "attempting to divide by zero");
        Some((self.checked_div(*divisor)?, self.checked_rem(*divisor)?))
    }

    fn euclidean_size(&self) -> u64 {
        self.unsigned_abs()
    }

    fn canonical_unit(&self) -> Self {
        if *self < 0 { -1 } else { 1 }
    }

    fn sub_multiple(&self, factor: &Self, other: &Self) -> Option<Self> {
        factor
            .checked_mul(*other)
            .and_then(|product| self.checked_sub(product))
    }

    fn from_integer(value: i64) -> Self {
        value
    }

    fn math_symbol() -> String {
        "ℤ".to_string()
    }
}
