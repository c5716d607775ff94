// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `Cyclic` type implementing the prime field of integers with
//! configurable modulus, used for Betti numbers with field coefficients.

use std::convert::From;
use std::fmt::{Display, Error, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::algebra::traits::{EuclideanRing, RingLike};

/// The field of integers modulo `MOD`, for prime modulus values `MOD`.
///
/// # Important Note
/// `MOD` **must** be a prime number for the field operations to be
/// mathematically correct. While this is not explicitly checked, `invert`
/// relies on Fermat's little theorem. Products are taken in `u128`, so any
/// modulus that fits in `u64` is free of overflow.
///
/// # Examples
/// ```rust
/// use ripshom::Cyclic;
/// assert_eq!(Cyclic::<5>::from(8), Cyclic::<5>::from(3));
/// assert_ne!(Cyclic::<7>::from(8), Cyclic::<7>::from(3));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cyclic<const MOD: u64> {
    remainder: u64,
}

impl<const MOD: u64> Cyclic<MOD> {
    /// Create a new `Cyclic` instance with the given value modulo `MOD`. Panics
    /// if `MOD` is less than 2.
    pub fn new(value: u64) -> Self {
        assert!(
            MOD > 1,
            "modulus values must be a prime number greater than or equal to 2"
        );
        Self {
            remainder: value % MOD,
        }
    }

    /// The canonical representative in `0..MOD`.
    pub fn value(&self) -> u64 {
        self.remainder
    }

    fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut result = Self::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result *= base;
            }
            base *= base;
            exponent >>= 1;
        }
        result
    }
}

impl<const MOD: u64> From<u64> for Cyclic<MOD> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const MOD: u64> RingLike for Cyclic<MOD> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_invertible(&self) -> bool {
        self.remainder != 0
    }

    fn invert(&self) -> Self {
        assert!(
            self.remainder != 0,
            "attempting to invert equivalency class zero"
        );
        if MOD == 2 {
            return *self;
        }
        self.pow(MOD - 2)
    }
}

impl<const MOD: u64> EuclideanRing for Cyclic<MOD> {
    fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        Some((*self * divisor.invert(), Self::zero()))
    }

    fn euclidean_size(&self) -> u64 {
        u64::from(self.remainder != 0)
    }

    fn canonical_unit(&self) -> Self {
        if self.remainder == 0 {
            Self::one()
        } else {
            self.invert()
        }
    }

    fn sub_multiple(&self, factor: &Self, other: &Self) -> Option<Self> {
        Some(*self - *factor * *other)
    }

    fn from_integer(value: i64) -> Self {
        Self::new(i128::from(value).rem_euclid(i128::from(MOD)) as u64)
    }

    fn math_symbol() -> String {
        format!("𝔽_{MOD}")
    }
}

impl<const MOD: u64> Display for Cyclic<MOD> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{} (mod {})", self.remainder, MOD)
    }
}

impl<const MOD: u64> Neg for Cyclic<MOD> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.remainder == 0 {
            self
        } else {
            Self {
                remainder: MOD - self.remainder,
            }
        }
    }
}

impl<const MOD: u64> AddAssign for Cyclic<MOD> {
    fn add_assign(&mut self, rhs: Self) {
        let sum = (u128::from(self.remainder) + u128::from(rhs.remainder)) % u128::from(MOD);
        self.remainder = sum as u64;
    }
}

impl<const MOD: u64> Add for Cyclic<MOD> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const MOD: u64> SubAssign for Cyclic<MOD> {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl<const MOD: u64> Sub for Cyclic<MOD> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<const MOD: u64> MulAssign for Cyclic<MOD> {
    fn mul_assign(&mut self, rhs: Self) {
        let product = u128::from(self.remainder) * u128::from(rhs.remainder) % u128::from(MOD);
        self.remainder = product as u64;
    }
}

impl<const MOD: u64> Mul for Cyclic<MOD> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}
