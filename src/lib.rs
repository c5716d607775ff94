// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `ripshom` crate computes the simplicial homology of proximity
//! complexes built over points in the plane.
//!
//! Points closer than twice a threshold `ε` are joined by edges, higher
//! simplices are admitted level by level, and homology is read off the Smith
//! normal forms of the integer boundary matrices.
//!
//! ```rust
//! use ripshom::{compute_homology, ComplexBuilder, DistanceIndex, PointCloud};
//!
//! let square = PointCloud::from([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
//! let distances = DistanceIndex::new(&square);
//! let complex = ComplexBuilder::new(&distances, 6.0)?.build(2)?;
//!
//! let h1 = compute_homology(&complex, 1)?;
//! assert_eq!(h1.to_string(), "H_1 = ℤ^1");
//! # Ok::<(), ripshom::HomologyError>(())
//! ```

#![warn(missing_docs)]

pub use crate::algebra::{
    Additive, AlgebraicBase, Chain, Cyclic, EuclideanRing, ModuleLike, Multiplicative, RingLike,
};
pub use crate::complexes::{
    Combinations, ComplexBuilder, ComplexLike, DistanceIndex, Point, PointCloud, Simplex,
    SimplicialComplex,
};
pub use crate::error::{HomologyError, Result};
pub use crate::homology::{
    boundary, compute_homology, compute_homology_with, homology_from_boundaries, BoundaryMatrix,
    HomologyGroup, SmithNormalForm,
};
pub use crate::session::{RecomputeCoalescer, Session, SessionConfig, Snapshot};

mod algebra;
mod complexes;
mod error;
mod homology;
mod session;
